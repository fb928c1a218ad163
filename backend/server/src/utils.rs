use std::str::FromStr;

use bank::{
    Record,
    catalog::{COLLEGE, HOME_STATE, OCCUPATION, PRESIDENT, id_and_name},
};

use crate::error::AppError;

pub const NO_MATCH: &str = "Sorry, no match was found.";
pub const EMPTY_QUERY: &str = "Type full or partial text to search for.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCategory {
    #[default]
    President,
    HomeState,
    Occupation,
    College,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 4] = [
        SearchCategory::President,
        SearchCategory::HomeState,
        SearchCategory::Occupation,
        SearchCategory::College,
    ];

    pub fn field(self) -> &'static str {
        match self {
            SearchCategory::President => PRESIDENT,
            SearchCategory::HomeState => HOME_STATE,
            SearchCategory::Occupation => OCCUPATION,
            SearchCategory::College => COLLEGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchCategory::President => "President's Name, e.g. John",
            SearchCategory::HomeState => "Home State, e.g. Virginia",
            SearchCategory::Occupation => "Occupation, e.g. Lawyer",
            SearchCategory::College => "College, e.g. Harvard",
        }
    }

    /// Missing or blank form values fall back to searching by name.
    pub fn from_form(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for SearchCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.field() == s)
            .ok_or_else(|| AppError::MalformedPayload(format!("unknown search category {s:?}")))
    }
}

/// What the search page does with a result sequence.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Redirect(&'a str),
    Results(Vec<(&'a str, &'a str)>),
    NoMatch,
}

pub fn search_outcome<'a>(matches: &[&'a Record]) -> SearchOutcome<'a> {
    match matches {
        [] => SearchOutcome::NoMatch,
        [single] => SearchOutcome::Redirect(id_and_name(*single).0),
        many => SearchOutcome::Results(many.iter().map(|record| id_and_name(*record)).collect()),
    }
}

pub fn detail_path(id: &str) -> String {
    format!("/president/{id}")
}

#[cfg(test)]
mod tests {
    use bank::{Catalog, parse_records};

    use super::*;

    fn catalog() -> Catalog {
        let set = parse_records(
            "Presidency,President,Home-state\n1,Washington,Virginia\n2,Adams,Massachusetts\n3,Jefferson,Virginia\n",
        )
        .unwrap();
        Catalog::new(set).unwrap()
    }

    #[test]
    fn test_single_match_redirects() {
        let catalog = catalog();
        let matches = catalog.search(PRESIDENT, "ad").unwrap();

        assert_eq!(search_outcome(&matches), SearchOutcome::Redirect("2"));
    }

    #[test]
    fn test_many_matches_listed() {
        let catalog = catalog();
        let matches = catalog.search(HOME_STATE, "virginia").unwrap();

        assert_eq!(
            search_outcome(&matches),
            SearchOutcome::Results(vec![("1", "Washington"), ("3", "Jefferson")])
        );
    }

    #[test]
    fn test_no_match() {
        let catalog = catalog();
        let matches = catalog.search(PRESIDENT, "z").unwrap();

        assert_eq!(search_outcome(&matches), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "Home-state".parse::<SearchCategory>().unwrap(),
            SearchCategory::HomeState
        );
        assert_eq!(SearchCategory::from_form(None).unwrap(), SearchCategory::President);
        assert_eq!(SearchCategory::from_form(Some("")).unwrap(), SearchCategory::President);
        assert!(matches!(
            SearchCategory::from_form(Some("Party")),
            Err(AppError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path("16"), "/president/16");
    }
}
