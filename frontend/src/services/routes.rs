/// Client-side views of the app, one per menu tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    People,
    Categories,
    Transactions,
    TotalsByPerson,
    TotalsByCategory,
}

impl Route {
    /// Order of the tabs in the header menu
    pub const MENU: [Route; 5] = [
        Route::People,
        Route::Categories,
        Route::Transactions,
        Route::TotalsByPerson,
        Route::TotalsByCategory,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::People => "/pessoas",
            Route::Categories => "/categorias",
            Route::Transactions => "/transacoes",
            Route::TotalsByPerson => "/totais/pessoas",
            Route::TotalsByCategory => "/totais/categorias",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::People => "Pessoas",
            Route::Categories => "Categorias",
            Route::Transactions => "Transações",
            Route::TotalsByPerson => "Totais por Pessoa",
            Route::TotalsByCategory => "Totais por Categoria",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::People => "fas fa-users",
            Route::Categories => "fas fa-tags",
            Route::Transactions => "fas fa-exchange-alt",
            Route::TotalsByPerson => "fas fa-chart-pie",
            Route::TotalsByCategory => "fas fa-chart-bar",
        }
    }

    /// Match a browser path; `None` means the caller should redirect
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        Route::MENU
            .iter()
            .copied()
            .find(|route| route.path() == trimmed)
    }

    /// Route to show for a path, falling back to the people view
    pub fn resolve(path: &str) -> Route {
        Route::from_path(path).unwrap_or_default()
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::People
    }
}
