use leptos::prelude::*;

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_variant_group::ui::VariantGroupsPage;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_settings::ui::SettingsPage;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;

/// Dashboard pages reachable from the sidebar. Navigation is a plain
/// signal switch; there is no URL router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Products,
    Orders,
    Customers,
    Categories,
    Variants,
    Settings,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Products => "Products",
            Page::Orders => "Orders",
            Page::Customers => "Customers",
            Page::Categories => "Categories",
            Page::Variants => "Variant groups",
            Page::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Overview => "dashboard",
            Page::Products => "products",
            Page::Orders => "orders",
            Page::Customers => "customers",
            Page::Categories => "categories",
            Page::Variants => "variants",
            Page::Settings => "settings",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Overview,
            Page::Products,
            Page::Orders,
            Page::Customers,
            Page::Categories,
            Page::Variants,
            Page::Settings,
        ]
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let current_page = RwSignal::new(Page::Overview);

    view! {
        <div class="app-shell">
            <Sidebar current_page=current_page />
            <div class="app-main">
                <Header />
                <main class="app-content">
                    {move || match current_page.get() {
                        Page::Overview => view! { <OverviewDashboard /> }.into_any(),
                        Page::Products => view! { <ProductList /> }.into_any(),
                        Page::Orders => view! { <OrderList /> }.into_any(),
                        Page::Customers => view! { <UsersListPage /> }.into_any(),
                        Page::Categories => view! { <CategoryList /> }.into_any(),
                        Page::Variants => view! { <VariantGroupsPage /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
