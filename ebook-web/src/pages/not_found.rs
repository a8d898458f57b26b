use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::routes::Route;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return Html::default();
    };
    let navigator = use_navigator();
    let go_shelf = Callback::from(move |_| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Shelf);
        }
    });

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ ctx.i18n.t("not_found.title") }</h1>
            <p>{ ctx.i18n.t("not_found.message") }</p>
            <button type="button" onclick={go_shelf}>
                { ctx.i18n.t("not_found.back") }
            </button>
        </section>
    }
}
