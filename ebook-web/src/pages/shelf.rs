use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::context::AppContext;
use crate::loader::ViewId;
use crate::routes::Route;

/// Container view behind `/ebook`: the bookshelf. Rendered on its own when
/// no dynamic child segment is present.
#[function_component(EbookShelf)]
pub fn ebook_shelf() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return Html::default();
    };
    let view = ctx.views.load(ViewId::Shelf);
    let catalog = use_memo((), |()| Catalog::load_from_static());
    let navigator = use_navigator();

    let on_lang_change = {
        let on_locale_change = ctx.on_locale_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                on_locale_change.emit(select.value());
            }
        })
    };

    let books = catalog
        .books
        .iter()
        .map(|book| {
            let open = {
                let navigator = navigator.clone();
                let file_name = book.file_name.clone();
                Callback::from(move |_| {
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Reader {
                            file_name: file_name.clone(),
                        });
                    }
                })
            };
            html! {
                <li class="shelf-book" key={book.file_name.clone()}>
                    <span class="shelf-book__title">{ &book.title }</span>
                    <span class="shelf-book__author muted">{ &book.author }</span>
                    <button type="button" onclick={open}>{ ctx.i18n.t("shelf.open") }</button>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="panel shelf" data-view={view.id.name()}>
            <link rel="stylesheet" href={view.stylesheet.clone()} />
            <header class="shelf-header">
                <h1>{ ctx.i18n.t(view.title_key) }</h1>
                <p class="muted">{ ctx.i18n.t("shelf.subtitle") }</p>
                <nav aria-label={ctx.i18n.t("nav.language")}>
                    <label for="shelf-lang-select" class="sr-only">{ ctx.i18n.t("nav.language") }</label>
                    <select id="shelf-lang-select" onchange={on_lang_change}>
                        { for crate::i18n::locales().iter().map(|meta| html! {
                            <option
                                value={meta.code}
                                selected={meta.code == ctx.i18n.locale()}
                            >
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </header>
            {
                if catalog.books.is_empty() {
                    html! { <p class="muted">{ ctx.i18n.t("shelf.empty") }</p> }
                } else {
                    html! { <ul class="shelf-books">{ books }</ul> }
                }
            }
        </section>
    }
}
