use fivestar_core::{RatingTheme, aria_label, is_activation_key, star_states};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::template::{CONTAINER_CLASS, STAR_PATH, STAR_VIEW_BOX};

#[derive(Properties, PartialEq, Clone)]
pub struct RatingProps {
    #[prop_or_default]
    pub value: i32,
    #[prop_or_default]
    pub read_only: bool,
    #[prop_or_default]
    pub theme: RatingTheme,
    #[prop_or_default]
    pub class: Classes,
    /// Fired with the new value when the user picks a star. Changing
    /// `value` from the parent never fires it.
    #[prop_or_default]
    pub on_change: Callback<i32>,
}

/// Five-star rating rendered into the page's own markup.
#[function_component(Rating)]
pub fn rating(props: &RatingProps) -> Html {
    let value = use_state(|| props.value);
    {
        let value = value.clone();
        use_effect_with(props.value, move |external| {
            value.set(*external);
            || {}
        });
    }

    let read_only = props.read_only;
    let select = {
        let value = value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |next: i32| {
            if read_only {
                return;
            }
            value.set(next);
            on_change.emit(next);
        })
    };

    let style = props.theme.style_overrides();
    let class = classes!(
        CONTAINER_CLASS,
        read_only.then_some("readonly"),
        props.class.clone()
    );

    html! {
        <div class={class}
             role="radiogroup"
             aria-label="Rating"
             aria-readonly={ if read_only { "true" } else { "false" } }
             style={ (!style.is_empty()).then_some(style) }>
            <style>{ RatingTheme::inline_stylesheet() }</style>
            { for star_states(*value, read_only).into_iter().map(|star| {
                let next = star.activation_value();
                let onclick = {
                    let select = select.clone();
                    Callback::from(move |_: MouseEvent| select.emit(next))
                };
                let onkeydown = {
                    let select = select.clone();
                    Callback::from(move |e: KeyboardEvent| {
                        if read_only || !is_activation_key(&e.key()) {
                            return;
                        }
                        e.prevent_default();
                        e.stop_propagation();
                        select.emit(next);
                    })
                };
                html! {
                    <svg class={classes!("star", star.selected.then_some("selected"))}
                         role="radio"
                         aria-checked={star.aria_checked()}
                         aria-label={aria_label(star.index)}
                         tabindex={star.tab_index.to_string()}
                         data-index={star.index.to_string()}
                         viewBox={STAR_VIEW_BOX}
                         {onclick}
                         {onkeydown}>
                        <path d={STAR_PATH} />
                    </svg>
                }
            }) }
        </div>
    }
}
