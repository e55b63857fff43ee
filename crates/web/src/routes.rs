use leptos::prelude::*;

/// Top-level views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Orders,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Orders, Self::About, Self::Contact];

    /// Resolve a location hash such as `#/orders`; anything unknown is Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        Self::ALL
            .into_iter()
            .find(|page| page.slug() == path)
            .unwrap_or(Self::Home)
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Orders => "orders",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#/{}", self.slug())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Orders => "Orders",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

/// Track the location hash as a signal.
pub fn install() -> RwSignal<Page> {
    let page = RwSignal::new(Page::from_hash(&current_hash()));

    watch_hash(page);

    page
}

#[cfg(target_arch = "wasm32")]
fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_hash() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn watch_hash(page: RwSignal<Page>) {
    // Lives as long as the app shell, which is the whole page.
    let _listener = window_event_listener(leptos::ev::hashchange, move |_| {
        page.set(Page::from_hash(&current_hash()));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_hash(_page: RwSignal<Page>) {}
