// Page components
// Each page is mountable into the outlet with no props. The calculations
// behind them live elsewhere; these views only provide the page frame.

use std::fmt;

use maud::{html, Markup};

/// Identifies a page independently of its route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Salary,
    IrpfCreditForRent,
    Fonasa,
    SalaryData,
}

/// A view that can be mounted into the outlet
pub trait Page: fmt::Debug + Sync {
    fn id(&self) -> PageId;

    /// Text for the document `<title>` and navigation links
    fn title(&self) -> &'static str;

    fn render(&self) -> Markup;
}

/// How route entries reference pages
///
/// Pages are statics, so a reference is resolved once when the route
/// table is built and stays valid for the whole application lifetime.
pub type PageRef = &'static dyn Page;

#[derive(Debug)]
pub struct HomeView;

#[derive(Debug)]
pub struct SalaryPage;

#[derive(Debug)]
pub struct IrpfCreditForRentPage;

#[derive(Debug)]
pub struct FonasaPage;

#[derive(Debug)]
pub struct SalaryDataPage;

pub static HOME_VIEW: HomeView = HomeView;
pub static SALARY_PAGE: SalaryPage = SalaryPage;
pub static IRPF_CREDIT_FOR_RENT_PAGE: IrpfCreditForRentPage = IrpfCreditForRentPage;
pub static FONASA_PAGE: FonasaPage = FonasaPage;
pub static SALARY_DATA_PAGE: SalaryDataPage = SalaryDataPage;

/// Shared frame: heading, lead paragraph, and the slot the calculator
/// widgets hydrate into
fn page_frame(id: &str, title: &str, lead: &str) -> Markup {
    html! {
        section.page id=(id) {
            h1 { (title) }
            p.lead { (lead) }
            div.calculator data-page=(id) {}
        }
    }
}

impl Page for HomeView {
    fn id(&self) -> PageId {
        PageId::Home
    }

    fn title(&self) -> &'static str {
        "Inicio"
    }

    fn render(&self) -> Markup {
        html! {
            section.page id="home" {
                h1 { "Calculadora de sueldo" }
                p.lead { "Elegí una herramienta para empezar." }
            }
        }
    }
}

impl Page for SalaryPage {
    fn id(&self) -> PageId {
        PageId::Salary
    }

    fn title(&self) -> &'static str {
        "Sueldo líquido"
    }

    fn render(&self) -> Markup {
        page_frame(
            "salary",
            self.title(),
            "Calculá tu sueldo líquido a partir del nominal.",
        )
    }
}

impl Page for IrpfCreditForRentPage {
    fn id(&self) -> PageId {
        PageId::IrpfCreditForRent
    }

    fn title(&self) -> &'static str {
        "Crédito IRPF por alquiler"
    }

    fn render(&self) -> Markup {
        page_frame(
            "irpf-credit-for-rent",
            self.title(),
            "Estimá el crédito de IRPF por el alquiler de tu vivienda.",
        )
    }
}

impl Page for FonasaPage {
    fn id(&self) -> PageId {
        PageId::Fonasa
    }

    fn title(&self) -> &'static str {
        "Aporte FONASA"
    }

    fn render(&self) -> Markup {
        page_frame(
            "fonasa",
            self.title(),
            "Consultá el aporte al Fondo Nacional de Salud según tu situación.",
        )
    }
}

impl Page for SalaryDataPage {
    fn id(&self) -> PageId {
        PageId::SalaryData
    }

    fn title(&self) -> &'static str {
        "Datos salariales"
    }

    fn render(&self) -> Markup {
        page_frame(
            "salary-data",
            self.title(),
            "Parámetros y tablas usados por las calculadoras.",
        )
    }
}
