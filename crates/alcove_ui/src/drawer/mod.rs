//! Slide-in disclosure drawer anchored to a viewport edge.
//!
//! The drawer composes a trigger control, an overlay surface with a backdrop,
//! and an optional dismiss control. Visibility lives in [`DrawerState`] and
//! is mutated exclusively through [`reduce_drawer`]; the component layer here
//! only wires interaction events and the external `open` input into reducer
//! actions and delivers the emitted notification effects.

use std::cell::Cell;

use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::icon::{Icon, IconName, IconSize};
use crate::primitives::{
    merge_layout_class, Button, ButtonSize, ButtonVariant, IconButton,
};

mod state;

pub use state::{reduce_drawer, DrawerAction, DrawerEffect, DrawerState};

/// Extent applied when the caller does not size the drawer.
pub const DEFAULT_DRAWER_EXTENT: u32 = 400;

const GENERIC_SURFACE_LABEL: &str = "Drawer";

/// Viewport edge the drawer surface slides from. Fixed for the lifetime of an
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAnchor {
    /// Leading edge of the viewport.
    Start,
    /// Trailing edge of the viewport.
    End,
    /// Top edge of the viewport.
    Top,
    /// Bottom edge of the viewport.
    Bottom,
}

impl Default for DrawerAnchor {
    fn default() -> Self {
        Self::Start
    }
}

impl DrawerAnchor {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Inline sizing rule for the surface. Side anchors consume the extent as
    /// width, top/bottom anchors as height; the mapping is recomputed from
    /// the anchor rather than stored.
    pub fn extent_style(self, extent: u32) -> String {
        match self {
            Self::Start | Self::End => format!("width: {extent}px"),
            Self::Top | Self::Bottom => format!("height: {extent}px"),
        }
    }
}

/// Display options forwarded to the built-in trigger control.
///
/// This is a closed set of recognized fields rather than an open attribute
/// bag, merged over [`DrawerButtonProps::default`] by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerButtonProps {
    /// Trigger label text.
    pub label: String,
    /// Visual variant forwarded to the button.
    pub variant: ButtonVariant,
    /// Size token forwarded to the button.
    pub size: ButtonSize,
    /// Disables activation.
    pub disabled: bool,
    /// Marks the control busy; busy controls do not activate.
    pub busy: bool,
    /// Optional leading icon.
    pub leading_icon: Option<IconName>,
}

impl Default for DrawerButtonProps {
    fn default() -> Self {
        Self {
            label: "Open".to_string(),
            variant: ButtonVariant::Standard,
            size: ButtonSize::Md,
            disabled: false,
            busy: false,
            leading_icon: None,
        }
    }
}

/// Accessible-name decision for the dialog surface: labelled by the rendered
/// title when one exists, otherwise a generic static label. Exactly one of
/// the two, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SurfaceLabel {
    /// `aria-labelledby` referencing the title element id.
    TitledBy(String),
    /// Static `aria-label` fallback.
    Generic(&'static str),
}

fn surface_label(title: Option<&str>, instance: u64) -> SurfaceLabel {
    match title {
        Some(_) => SurfaceLabel::TitledBy(title_element_id(instance)),
        None => SurfaceLabel::Generic(GENERIC_SURFACE_LABEL),
    }
}

fn title_element_id(instance: u64) -> String {
    format!("ui-drawer-title-{instance}")
}

/// Instance-unique id component, generated once per mount.
fn next_instance_id() -> u64 {
    thread_local! {
        static NEXT_INSTANCE_ID: Cell<u64> = const { Cell::new(0) };
    }
    NEXT_INSTANCE_ID.with(|next| {
        let id = next.get().saturating_add(1);
        next.set(id);
        id
    })
}

#[component]
/// Slide-in disclosure drawer with a hybrid controlled/uncontrolled contract.
///
/// The external `open` input is authoritative whenever its value changes;
/// between changes, user-driven open/close requests diverge freely without
/// writing back to the caller. `on_open`/`on_close` fire on every user-driven
/// request, including redundant ones; external synchronization is silent.
pub fn Drawer(
    /// Caller-desired visibility, observed on every render.
    #[prop(optional, into)]
    open: MaybeSignal<bool>,
    /// Notified on every user-driven open request.
    #[prop(optional)]
    on_open: Option<Callback<()>>,
    /// Notified on every user-driven close request.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Title rendered in the surface header; also names the dialog region.
    #[prop(optional, into)]
    title: Option<String>,
    /// Edge the surface is anchored to.
    #[prop(default = DrawerAnchor::Start)]
    anchor: DrawerAnchor,
    /// Width (side anchors) or height (top/bottom anchors) in pixels.
    #[prop(default = DEFAULT_DRAWER_EXTENT)]
    extent: u32,
    /// Gates the built-in trigger control.
    #[prop(default = true)]
    open_button: bool,
    /// Gates the dismiss control inside the surface.
    #[prop(default = true)]
    close_button: bool,
    /// Display options for the trigger control.
    #[prop(optional)]
    open_button_props: Option<DrawerButtonProps>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Surface body content, uninterpreted.
    children: ChildrenFn,
) -> impl IntoView {
    let state = create_rw_signal(DrawerState::seeded(open.get_untracked()));
    let on_open = store_value(on_open);
    let on_close = store_value(on_close);

    // One-way observer: copy the external input into local state once per
    // update cycle. The reducer decides whether anything actually changes.
    create_effect(move |_| {
        let external = open.get();
        state.update(|current| {
            let effects = reduce_drawer(current, DrawerAction::SyncExternal(external));
            debug_assert!(effects.is_empty(), "external sync must stay silent");
        });
    });

    let dispatch = move |action: DrawerAction| {
        let effects = state
            .try_update(|current| reduce_drawer(current, action))
            .unwrap_or_default();
        for effect in effects {
            match effect {
                DrawerEffect::NotifyOpened => {
                    if let Some(on_open) = on_open.get_value() {
                        on_open.call(());
                    }
                }
                DrawerEffect::NotifyClosed => {
                    if let Some(on_close) = on_close.get_value() {
                        on_close.call(());
                    }
                }
            }
        }
    };

    let instance = next_instance_id();
    let (labelled_by, generic_label) = match surface_label(title.as_deref(), instance) {
        SurfaceLabel::TitledBy(id) => (Some(id), None),
        SurfaceLabel::Generic(text) => (None, Some(text)),
    };
    let title_id = labelled_by.clone();
    let extent_style = anchor.extent_style(extent);
    let trigger = open_button_props.unwrap_or_default();
    let is_open = move || state.with(|current| current.is_open());

    view! {
        <div
            class=merge_layout_class("ui-drawer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="drawer"
            data-ui-anchor=anchor.token()
            data-ui-state=move || if is_open() { "open" } else { "closed" }
        >
            {open_button.then(|| {
                let trigger_label = trigger.label.clone();
                let trigger_icon = trigger.leading_icon;
                view! {
                    <Button
                        ui_slot="trigger"
                        variant=trigger.variant
                        size=trigger.size
                        disabled=trigger.disabled
                        busy=trigger.busy
                        aria_haspopup="dialog".to_string()
                        aria_expanded=Signal::derive(is_open)
                        on_click=Callback::new(move |_| dispatch(DrawerAction::RequestOpen))
                    >
                        {trigger_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                        {trigger_label}
                    </Button>
                }
            })}
            <Show when=is_open fallback=|| ()>
                <div
                    data-ui-slot="backdrop"
                    aria-hidden="true"
                    on:click=move |_| dispatch(DrawerAction::RequestClose)
                ></div>
                <section
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=labelled_by.clone()
                    aria-label=generic_label
                    style=extent_style.clone()
                    tabindex="-1"
                    data-ui-slot="surface"
                    data-ui-anchor=anchor.token()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dispatch(DrawerAction::RequestClose);
                        }
                    }
                >
                    <header data-ui-slot="header">
                        {title.clone().map(|text| view! {
                            <h2 id=title_id.clone() data-ui-slot="title">{text}</h2>
                        })}
                        {close_button.then(|| view! {
                            <IconButton
                                icon=IconName::Dismiss
                                ui_slot="dismiss"
                                aria_label="Close drawer".to_string()
                                on_click=Callback::new(move |_| dispatch(DrawerAction::RequestClose))
                            />
                        })}
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn side_anchors_map_extent_to_width() {
        assert_eq!(DrawerAnchor::Start.extent_style(400), "width: 400px");
        assert_eq!(DrawerAnchor::End.extent_style(280), "width: 280px");
    }

    #[test]
    fn vertical_anchors_map_extent_to_height() {
        assert_eq!(DrawerAnchor::Top.extent_style(400), "height: 400px");
        assert_eq!(DrawerAnchor::Bottom.extent_style(180), "height: 180px");
    }

    #[test]
    fn default_anchor_is_start_edge() {
        assert_eq!(DrawerAnchor::default(), DrawerAnchor::Start);
    }

    #[test]
    fn titled_surface_is_labelled_by_the_title_element_only() {
        let label = surface_label(Some("Settings"), 7);
        assert_eq!(label, SurfaceLabel::TitledBy("ui-drawer-title-7".to_string()));
    }

    #[test]
    fn untitled_surface_carries_the_generic_label_only() {
        let label = surface_label(None, 7);
        assert_eq!(label, SurfaceLabel::Generic(GENERIC_SURFACE_LABEL));
    }

    #[test]
    fn instance_ids_are_unique_per_mount() {
        let first = next_instance_id();
        let second = next_instance_id();
        assert_ne!(first, second);
        assert_ne!(title_element_id(first), title_element_id(second));
    }

    #[test]
    fn trigger_props_default_to_an_enabled_standard_button() {
        let props = DrawerButtonProps::default();
        assert_eq!(props.label, "Open");
        assert_eq!(props.variant, ButtonVariant::Standard);
        assert_eq!(props.size, ButtonSize::Md);
        assert!(!props.disabled);
        assert!(!props.busy);
        assert_eq!(props.leading_icon, None);
    }
}
