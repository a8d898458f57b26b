use yew::prelude::*;

use crate::context::AppContext;
use crate::store::{ReaderAction, ReaderStore};

/// Bottom menu bar of the reader view, driven entirely by the store.
#[function_component(MenuBar)]
pub fn menu_bar() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return Html::default();
    };
    let Some(store) = use_context::<ReaderStore>() else {
        return Html::default();
    };

    let toggle = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(ReaderAction::ToggleMenu))
    };
    let smaller = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(ReaderAction::FontSmaller))
    };
    let larger = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(ReaderAction::FontLarger))
    };

    let toggle_label = if store.menu_visible {
        ctx.i18n.t("menu.hide")
    } else {
        ctx.i18n.t("menu.show")
    };

    html! {
        <footer class="menu-bar">
            <button type="button" class="menu-toggle" onclick={toggle}>{ toggle_label }</button>
            {
                if store.menu_visible {
                    html! {
                        <div class="menu-panel" role="menu">
                            <span class="menu-item">{ ctx.i18n.t("menu.catalog") }</span>
                            <span class="menu-item">{ ctx.i18n.t("menu.progress") }</span>
                            <span class="menu-item">
                                { ctx.i18n.t("menu.font_size") }
                                <button type="button" onclick={smaller}>{ ctx.i18n.t("menu.smaller") }</button>
                                <span class="menu-font-size">{ store.font_size.to_string() }</span>
                                <button type="button" onclick={larger}>{ ctx.i18n.t("menu.larger") }</button>
                            </span>
                        </div>
                    }
                } else {
                    Html::default()
                }
            }
        </footer>
    }
}
