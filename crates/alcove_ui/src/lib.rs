//! Shared UI component library for small Leptos applications.
//!
//! The crate owns three presentational widgets (a button, a slide-in
//! disclosure drawer, and a navigation bar) plus the theme context, a
//! centralized icon API, and the stable `data-ui-*` DOM contract consumed by
//! the stylesheet layer. Apps should compose these primitives instead of
//! emitting ad hoc control markup.
//!
//! The drawer is the only stateful piece: its visibility lives in a headless
//! [`DrawerState`] record driven by [`reduce_drawer`], so the
//! controlled/uncontrolled contract can be exercised without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod drawer;
mod icon;
mod primitives;
mod theme;

pub use drawer::{
    reduce_drawer, Drawer, DrawerAction, DrawerAnchor, DrawerButtonProps, DrawerEffect,
    DrawerState, DEFAULT_DRAWER_EXTENT,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Cluster, Heading, IconButton, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, NavBar, Stack, Text, TextRole, TextTone,
};
pub use theme::{use_theme, ThemeMode, ThemeProvider, THEME_STORAGE_KEY};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        use_theme, Badge, Button, ButtonSize, ButtonVariant, Cluster, Drawer, DrawerAnchor,
        DrawerButtonProps, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, NavBar, Stack, Text, TextRole, TextTone, ThemeMode,
        ThemeProvider, DEFAULT_DRAWER_EXTENT,
    };
}
