use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFound;
use crate::pages::reader::EbookReader;
use crate::pages::shelf::EbookShelf;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ebook")]
    Shelf,
    #[at("/ebook/:file_name")]
    Reader { file_name: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Route table renderer. `/` never renders a view of its own: it redirects
/// to the shelf unconditionally.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Shelf} /> },
        Route::Shelf => html! { <EbookShelf /> },
        Route::Reader { file_name } => html! { <EbookReader {file_name} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
