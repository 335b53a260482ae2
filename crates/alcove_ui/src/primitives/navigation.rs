use super::*;

use crate::drawer::{Drawer, DrawerButtonProps};

#[component]
/// Fixed horizontal navigation bar composing one menu drawer, a title, and
/// optional trailing content.
///
/// The bar owns layout only: visibility and accessible labelling of the menu
/// surface belong to the embedded [`Drawer`], which is titled after the bar.
pub fn NavBar(
    /// Bar title, also used as the menu drawer title.
    #[prop(into)]
    title: String,
    /// Display options for the menu trigger. Defaults to a quiet button with
    /// the navigation glyph.
    #[prop(optional)]
    menu_button: Option<DrawerButtonProps>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Menu drawer body content.
    #[prop(into)]
    menu: ViewFn,
    /// Optional trailing bar content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let menu_button = menu_button.unwrap_or_else(|| DrawerButtonProps {
        label: "Menu".to_string(),
        variant: ButtonVariant::Quiet,
        leading_icon: Some(IconName::Navigation),
        ..DrawerButtonProps::default()
    });
    let drawer_title = title.clone();

    view! {
        <header
            class=merge_layout_class("ui-navbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="navbar"
        >
            <Drawer title=drawer_title open_button_props=menu_button>
                {menu.run()}
            </Drawer>
            <div data-ui-slot="title">{title}</div>
            <div data-ui-slot="actions">{children.map(|children| children())}</div>
        </header>
    }
}
