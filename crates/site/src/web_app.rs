use alcove_showcase::{current_story_request, ShowcaseApp, StoryId};
use alcove_ui::ThemeProvider;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Alcove UI" />
        <Meta
            name="description"
            content="Component library showcase: button, disclosure drawer, and navigation bar."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShowcaseEntry />
                    <Route path="/story/:id" view=StoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    let initial_story = current_story_request();

    view! {
        <ThemeProvider>
            <ShowcaseApp initial_story=initial_story />
        </ThemeProvider>
    }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    // Unknown story ids fall back to the showcase default.
    let story = params
        .with_untracked(|map| map.get("id").cloned())
        .and_then(|raw| StoryId::parse(&raw));

    view! {
        <ThemeProvider>
            <ShowcaseApp initial_story=story />
        </ThemeProvider>
    }
}
