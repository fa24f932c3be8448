//! `<OfficeAssistant>`: mascot that offers a tip, reveals it on accept, and
//! goes away on decline or close.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component is a thin shell over `state::widget::AssistantWidget`. Props
//! feed attribute updates, buttons feed clicks, and every inline style is read
//! back from the widget's style descriptor.

use leptos::prelude::*;

use crate::state::assistant::Control;
use crate::state::config::AssistantConfig;
use crate::state::lifecycle::Lifecycle;
use crate::state::position::Edge;
use crate::state::theme::{ROOT_CLASS, Theme};
use crate::state::widget::AssistantWidget;
use crate::util::style::display_css;

/// Office assistant with `prompt`, `accept`, `decline` and `tip` insertion
/// points and optional viewport offsets.
#[component]
pub fn OfficeAssistant(
    #[prop(into)] prompt: ViewFn,
    #[prop(into)] accept: ViewFn,
    #[prop(into)] decline: ViewFn,
    #[prop(into)] tip: ViewFn,
    #[prop(optional, into)] top: MaybeProp<String>,
    #[prop(optional, into)] right: MaybeProp<String>,
    #[prop(optional, into)] bottom: MaybeProp<String>,
    #[prop(optional, into)] left: MaybeProp<String>,
    #[prop(optional)] theme: Option<Theme>,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let edges = [
        (Edge::Top, top),
        (Edge::Right, right),
        (Edge::Bottom, bottom),
        (Edge::Left, left),
    ];

    let mut assistant = AssistantWidget::new(AssistantConfig::default().with_theme(theme.clone()));
    for (edge, value) in edges {
        assistant.set_edge(edge, value.get_untracked().as_deref());
    }
    assistant.on_mount();
    let widget = RwSignal::new(assistant);

    // One effect per edge so each attribute change is applied on its own.
    // The first run only subscribes; the initial value is already applied.
    for (edge, value) in edges {
        Effect::new(move |prev: Option<()>| {
            let next = value.get();
            if prev.is_some() {
                widget.update(|w| {
                    w.set_edge(edge, next.as_deref());
                });
            }
        });
    }

    on_cleanup(move || {
        widget.try_update(|w| w.on_unmount());
    });

    let style = Memo::new(move |_| widget.with(AssistantWidget::style));
    let container_style = move || style.with(|s| s.container.to_css());
    let intro_style = move || display_css(style.with(|s| s.intro_visible));
    let tip_style = move || display_css(style.with(|s| s.tip_visible));

    let on_control = move |control: Control| {
        move |_: leptos::ev::MouseEvent| {
            widget.update(|w| {
                w.click(control);
            });
        }
    };

    let stylesheet = theme.stylesheet();
    let scope = theme.scope();
    let Theme { image_src, image_alt, close_label, .. } = theme;

    view! {
        <div class=ROOT_CLASS data-theme=scope>
            <style>{stylesheet}</style>
            <div class="office-assistant__container" style=container_style>
                <div class="office-assistant__dialog">
                    <div class="office-assistant__intro" style=intro_style>
                        <div class="office-assistant__prompt">{prompt.run()}</div>
                        <button
                            type="button"
                            class="office-assistant__button"
                            data-control=Control::Accept.element_id()
                            on:click=on_control(Control::Accept)
                        >
                            {accept.run()}
                        </button>
                        <button
                            type="button"
                            class="office-assistant__button"
                            data-control=Control::Decline.element_id()
                            on:click=on_control(Control::Decline)
                        >
                            {decline.run()}
                        </button>
                    </div>
                    <div class="office-assistant__tip" style=tip_style>
                        <div class="office-assistant__tip-text">{tip.run()}</div>
                        <button
                            type="button"
                            class="office-assistant__button"
                            data-control=Control::Close.element_id()
                            on:click=on_control(Control::Close)
                        >
                            {close_label}
                        </button>
                    </div>
                </div>
                <img class="office-assistant__image" src=image_src alt=image_alt />
            </div>
        </div>
    }
}
