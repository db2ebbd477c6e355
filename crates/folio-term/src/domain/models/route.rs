use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Route {
    #[default]
    #[strum(serialize = "/")]
    Home,
    #[strum(serialize = "/about")]
    About,
    #[strum(serialize = "/projects")]
    Projects,
    #[strum(serialize = "/contact")]
    Contact,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Route {
        let routes = Route::iter().collect::<Vec<Route>>();
        let idx = routes.iter().position(|e| e == self).unwrap_or(0);
        return routes[(idx + 1) % routes.len()];
    }

    pub fn previous(&self) -> Route {
        let routes = Route::iter().collect::<Vec<Route>>();
        let idx = routes.iter().position(|e| e == self).unwrap_or(0);
        return routes[(idx + routes.len() - 1) % routes.len()];
    }
}
