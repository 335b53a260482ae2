//! Story-driven showcase app for the component library.
//!
//! Every widget family renders through `alcove_ui` primitives so visual and
//! behavioral refinements can be reviewed in one surface. Stories are
//! deep-linkable through a stable id registry, and interactive demo state is
//! persisted across reloads.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use alcove_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};

const SHOWCASE_STATE_KEY: &str = "alcove-showcase-state";
const EVENT_LOG_CAPACITY: usize = 8;

/// Canonical story surfaces exposed by the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryId {
    /// Button variants, sizes, and states.
    Buttons,
    /// Disclosure drawer behavior.
    Drawer,
    /// Navigation bar composition.
    NavBar,
}

impl StoryId {
    /// Every story in display order.
    pub const ALL: [StoryId; 3] = [StoryId::Buttons, StoryId::Drawer, StoryId::NavBar];

    /// Stable deep-link id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Drawer => "drawer",
            Self::NavBar => "nav-bar",
        }
    }

    /// Human-facing story title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Buttons => "Buttons",
            Self::Drawer => "Drawer",
            Self::NavBar => "Navigation bar",
        }
    }

    /// Parses a stable story id.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "buttons" => Some(Self::Buttons),
            "drawer" => Some(Self::Drawer),
            "nav-bar" => Some(Self::NavBar),
            _ => None,
        }
    }
}

/// Parses a story selection from a query string (`?story=drawer`).
pub fn parse_story_from_query(query: &str) -> Option<StoryId> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == "story" {
                StoryId::parse(value)
            } else {
                None
            }
        })
}

/// Returns the story requested by the current URL, when there is one.
pub fn current_story_request() -> Option<StoryId> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        parse_story_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ShowcaseState {
    story: StoryId,
    buttons_busy: bool,
    controlled_open: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            story: StoryId::Buttons,
            buttons_busy: false,
            controlled_open: false,
        }
    }
}

fn restored_state() -> Option<ShowcaseState> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(SHOWCASE_STATE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn persist_state(serialized: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        let Some(storage) = storage else {
            return;
        };
        if storage.set_item(SHOWCASE_STATE_KEY, serialized).is_err() {
            logging::warn!("showcase state persistence failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = serialized;
    }
}

#[component]
/// Showcase application shell: navigation chrome plus the active story.
///
/// Must be mounted under a [`ThemeProvider`].
pub fn ShowcaseApp(
    /// Story forced by the caller (deep links); overrides the persisted one.
    initial_story: Option<StoryId>,
) -> impl IntoView {
    let mut restored = restored_state().unwrap_or_default();
    if let Some(story) = initial_story {
        restored.story = story;
    }
    let state = create_rw_signal(restored);
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase state serialize failed: {err}");
                return;
            }
        };

        if last_saved.get().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized.clone()));
        persist_state(&serialized);
    });

    let mode = use_theme();
    let active = move || state.with(|current| current.story);

    view! {
        <div class="showcase-root" data-ui-slot="showcase">
            <NavBar
                title="Alcove UI"
                menu=move || view! {
                    <Stack gap=LayoutGap::Sm ui_slot="story-menu">
                        {StoryId::ALL
                            .iter()
                            .map(|&story| view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    selected=Signal::derive(move || {
                                        state.with(|current| current.story == story)
                                    })
                                    on_click=Callback::new(move |_| {
                                        state.update(|current| current.story = story)
                                    })
                                >
                                    {story.title()}
                                </Button>
                            })
                            .collect_view()}
                    </Stack>
                }
            >
                {move || {
                    let current = mode.get();
                    let (icon, label) = match current {
                        ThemeMode::Light => (IconName::WeatherMoon, "Switch to dark theme"),
                        ThemeMode::Dark => (IconName::WeatherSunny, "Switch to light theme"),
                    };
                    view! {
                        <IconButton
                            icon=icon
                            ui_slot="theme-toggle"
                            aria_label=label.to_string()
                            on_click=Callback::new(move |_| mode.set(current.toggled()))
                        />
                    }
                }}
            </NavBar>
            <main data-ui-slot="story">
                {move || match active() {
                    StoryId::Buttons => view! { <ButtonsStory state=state /> }.into_view(),
                    StoryId::Drawer => view! { <DrawerStory state=state /> }.into_view(),
                    StoryId::NavBar => view! { <NavBarStory /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ButtonsStory(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let busy = Signal::derive(move || state.with(|current| current.buttons_busy));

    view! {
        <Stack gap=LayoutGap::Lg>
            <Heading>"Buttons"</Heading>
            <Text tone=TextTone::Secondary>
                "Thin prop mapping over one button element: variant, size, and state tokens only."
            </Text>
            <Cluster gap=LayoutGap::Sm>
                <Button variant=ButtonVariant::Standard>"Standard"</Button>
                <Button variant=ButtonVariant::Primary>"Primary"</Button>
                <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                <Button variant=ButtonVariant::Danger>"Danger"</Button>
            </Cluster>
            <Cluster gap=LayoutGap::Sm>
                <Button size=ButtonSize::Sm>"Small"</Button>
                <Button size=ButtonSize::Md>"Medium"</Button>
                <Button size=ButtonSize::Lg>"Large"</Button>
            </Cluster>
            <Cluster gap=LayoutGap::Sm>
                <Button disabled=true>"Disabled"</Button>
                <Button variant=ButtonVariant::Primary busy=busy>"Save"</Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| {
                        state.update(|current| current.buttons_busy = !current.buttons_busy)
                    })
                >
                    {move || if busy.get() { "Clear busy state" } else { "Mark save busy" }}
                </Button>
                <Button leading_icon=IconName::ChevronLeft>"Back"</Button>
                <Button trailing_icon=IconName::ChevronRight>"Next"</Button>
                <IconButton icon=IconName::Dismiss aria_label="Dismiss demo".to_string() />
            </Cluster>
        </Stack>
    }
}

#[component]
fn DrawerStory(state: RwSignal<ShowcaseState>) -> impl IntoView {
    const ANCHOR_CHOICES: [(DrawerAnchor, &str); 4] = [
        (DrawerAnchor::Start, "Start"),
        (DrawerAnchor::End, "End"),
        (DrawerAnchor::Top, "Top"),
        (DrawerAnchor::Bottom, "Bottom"),
    ];

    let demo_anchor = create_rw_signal(DrawerAnchor::Start);
    let log = create_rw_signal(Vec::<String>::new());
    let event_seq = create_rw_signal(0u32);
    let record = move |entry: &'static str| {
        let seq = event_seq.get_untracked().saturating_add(1);
        event_seq.set(seq);
        log.update(|entries| {
            entries.push(format!("#{seq} {entry}"));
            if entries.len() > EVENT_LOG_CAPACITY {
                entries.remove(0);
            }
        });
    };
    let external_open = Signal::derive(move || state.with(|current| current.controlled_open));
    let untitled_trigger = DrawerButtonProps {
        label: "Open untitled drawer".to_string(),
        ..DrawerButtonProps::default()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Heading>"Drawer"</Heading>
            <Text tone=TextTone::Secondary>
                "Slide-in disclosure surface with a hybrid controlled/uncontrolled visibility contract."
            </Text>

            <section data-ui-slot="story-section">
                <Heading role=TextRole::Label>"Anchors"</Heading>
                <Cluster gap=LayoutGap::Sm>
                    {ANCHOR_CHOICES
                        .iter()
                        .map(|&(anchor, label)| view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                selected=Signal::derive(move || demo_anchor.get() == anchor)
                                on_click=Callback::new(move |_| demo_anchor.set(anchor))
                            >
                                {label}
                            </Button>
                        })
                        .collect_view()}
                </Cluster>
                {move || {
                    let anchor = demo_anchor.get();
                    let trigger = DrawerButtonProps {
                        label: format!("Open from {}", anchor.token()),
                        ..DrawerButtonProps::default()
                    };
                    view! {
                        <Drawer
                            title="Anchored drawer".to_string()
                            anchor=anchor
                            extent=320
                            open_button_props=trigger
                        >
                            <Text>
                                "Side anchors consume the extent as width; top and bottom anchors consume it as height."
                            </Text>
                        </Drawer>
                    }
                }}
            </section>

            <section data-ui-slot="story-section">
                <Heading role=TextRole::Label>"Controlled input"</Heading>
                <Text tone=TextTone::Secondary>
                    "The external toggle overrides the drawer silently; only the trigger, dismiss, backdrop, and Escape paths notify."
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| {
                            state.update(|current| current.controlled_open = !current.controlled_open)
                        })
                    >
                        {move || {
                            if external_open.get() {
                                "Set external open = false"
                            } else {
                                "Set external open = true"
                            }
                        }}
                    </Button>
                </Cluster>
                <Drawer
                    open=external_open
                    title="Controlled drawer".to_string()
                    on_open=Callback::new(move |_| record("open notified"))
                    on_close=Callback::new(move |_| record("close notified"))
                >
                    <Text>
                        "Closing from inside diverges from the external value until it changes again."
                    </Text>
                </Drawer>
                <ul data-ui-slot="event-log">
                    {move || {
                        let entries = log.get();
                        if entries.is_empty() {
                            view! { <li data-ui-slot="event-log-empty">"No notifications yet"</li> }
                                .into_view()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| view! { <li>{entry}</li> })
                                .collect_view()
                        }
                    }}
                </ul>
            </section>

            <section data-ui-slot="story-section">
                <Heading role=TextRole::Label>"Backdrop dismissal"</Heading>
                <Drawer
                    anchor=DrawerAnchor::End
                    close_button=false
                    on_close=Callback::new(move |_| record("close notified"))
                    open_button_props=untitled_trigger
                >
                    <Text>
                        "No dismiss control and no title: the backdrop or Escape still closes it, and the surface carries the generic accessible label."
                    </Text>
                </Drawer>
            </section>
        </Stack>
    }
}

#[component]
fn NavBarStory() -> impl IntoView {
    let menu_button = DrawerButtonProps {
        label: "Browse".to_string(),
        variant: ButtonVariant::Quiet,
        leading_icon: Some(IconName::Navigation),
        ..DrawerButtonProps::default()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Heading>"Navigation bar"</Heading>
            <Text tone=TextTone::Secondary>
                "Fixed horizontal bar wiring one menu drawer, a title, and trailing content."
            </Text>
            <div data-ui-slot="story-frame">
                <NavBar
                    title="Field Notes"
                    menu_button=menu_button
                    menu=|| view! {
                        <Stack gap=LayoutGap::Sm>
                            <Button variant=ButtonVariant::Quiet>"Inbox"</Button>
                            <Button variant=ButtonVariant::Quiet>"Archive"</Button>
                            <Button variant=ButtonVariant::Quiet>"Settings"</Button>
                        </Stack>
                    }
                >
                    <Badge>"3 drafts"</Badge>
                </NavBar>
            </div>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_ids_round_trip_through_parse() {
        for story in StoryId::ALL {
            assert_eq!(StoryId::parse(story.id()), Some(story));
        }
        assert_eq!(StoryId::parse("modal"), None);
    }

    #[test]
    fn query_parse_picks_the_story_parameter() {
        assert_eq!(
            parse_story_from_query("?story=drawer"),
            Some(StoryId::Drawer)
        );
        assert_eq!(
            parse_story_from_query("?theme=dark&story=nav-bar"),
            Some(StoryId::NavBar)
        );
        assert_eq!(parse_story_from_query("?story=unknown"), None);
        assert_eq!(parse_story_from_query("?story="), None);
        assert_eq!(parse_story_from_query(""), None);
    }

    #[test]
    fn showcase_state_round_trips_through_json() {
        let state = ShowcaseState {
            story: StoryId::Drawer,
            buttons_busy: true,
            controlled_open: true,
        };
        let serialized = serde_json::to_string(&state).expect("serialize");
        let restored: ShowcaseState = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(restored, state);
    }

    #[test]
    fn default_state_opens_on_the_buttons_story() {
        assert_eq!(ShowcaseState::default().story, StoryId::Buttons);
    }
}
