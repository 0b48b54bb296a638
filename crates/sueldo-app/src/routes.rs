// Route table for the calculator
// One entry per page; built once at bootstrap and shared by the navigator.

use sueldo_router::{Route, RouteTable};

use crate::pages::{
    PageRef, FONASA_PAGE, HOME_VIEW, IRPF_CREDIT_FOR_RENT_PAGE, SALARY_DATA_PAGE, SALARY_PAGE,
};

/// The registered `(path, name, page)` entries, in registration order
pub fn app_routes() -> Vec<Route<PageRef>> {
    vec![
        Route::new("/", "home", &HOME_VIEW as PageRef),
        Route::new("/salary", "salary", &SALARY_PAGE as PageRef),
        Route::new(
            "/irpf-credit-for-rent",
            "irpf-credit-for-rent",
            &IRPF_CREDIT_FOR_RENT_PAGE as PageRef,
        ),
        Route::new("/fonasa", "fonasa", &FONASA_PAGE as PageRef),
        Route::new("/salary-data", "salary-data", &SALARY_DATA_PAGE as PageRef),
    ]
}

/// Builds and validates the application route table
pub fn build_table(case_insensitive: bool) -> sueldo_router::Result<RouteTable<PageRef>> {
    RouteTable::builder()
        .with_case_sensitivity(case_insensitive)
        .with_routes(app_routes())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageId;

    #[test]
    fn test_table_builds() {
        let table = build_table(false).unwrap();
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_table_builds_case_insensitive() {
        assert!(build_table(true).is_ok());
    }

    #[test]
    fn test_names_match_expected_pages() {
        let table = build_table(false).unwrap();
        let expected = [
            ("home", PageId::Home),
            ("salary", PageId::Salary),
            ("irpf-credit-for-rent", PageId::IrpfCreditForRent),
            ("fonasa", PageId::Fonasa),
            ("salary-data", PageId::SalaryData),
        ];
        for (name, id) in expected {
            assert_eq!(table.get_by_name(name).unwrap().component.id(), id);
        }
    }
}
