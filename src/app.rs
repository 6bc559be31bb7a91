use yew::prelude::*;

use crate::hooks::{use_dashboard_stats, use_segments, use_session};
use crate::state::UiStore;

/// Root component. The route guard has already run in `main` before
/// anything mounts; this only wires the store context and the shell.
/// Page composition lives with the page components, not here.
#[function_component(App)]
pub fn app() -> Html {
    let ui_store = use_state(UiStore::new);

    html! {
        <ContextProvider<UiStore> context={(*ui_store).clone()}>
            <Shell />
        </ContextProvider<UiStore>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let ui = use_context::<UiStore>().expect("UiStore context is provided by App");
    let session = use_session();
    let stats = use_dashboard_stats();
    let segments = use_segments();

    let toggle_sidebar = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            ui.set_open(!ui.sidebar_open());
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let refresh_segments = {
        let mutate = segments.mutate.clone();
        Callback::from(move |_: MouseEvent| mutate.emit(()))
    };

    let username = session
        .session
        .as_ref()
        .map(|s| s.username.clone())
        .unwrap_or_default();

    html! {
        <div class="console">
            <header class="console-header">
                <button onclick={toggle_sidebar}>{ "☰" }</button>
                <h1>{ "Official Account Console" }</h1>
                <span class="operator">{ username }</span>
                <button onclick={on_logout}>{ "Logout" }</button>
            </header>

            if ui.sidebar_open() {
                <nav class="sidebar">
                    <a href="/">{ "Dashboard" }</a>
                    <a href="/audience">{ "Audience" }</a>
                    <a href="/campaigns">{ "Campaigns" }</a>
                    <a href="/richmenu">{ "Rich menu" }</a>
                    <a href="/autoreply">{ "Auto reply" }</a>
                    <a href="/history">{ "History" }</a>
                </nav>
            }

            <main>
                if let Some(stats) = &stats.stats {
                    <section class="stats">
                        <span>{ format!("Friends: {}", stats.friend_count) }</span>
                        <span>{ format!("Sent: {} / {}", stats.send_count, stats.send_limit) }</span>
                    </section>
                } else {
                    if stats.is_loading {
                        <section class="stats">{ "Loading stats..." }</section>
                    }
                }

                <section class="segments">
                    <button onclick={refresh_segments}>{ "Refresh" }</button>
                    if segments.is_loading {
                        <p>{ "Loading segments..." }</p>
                    } else {
                        if segments.is_error {
                            <p class="error">{ "Could not load segments" }</p>
                        } else {
                            <ul>
                                { for segments.segments.iter().map(|segment| html! {
                                    <li key={segment.id.clone()}>
                                        { format!("{} ({})", segment.name, segment.count) }
                                    </li>
                                }) }
                            </ul>
                        }
                    }
                </section>
            </main>
        </div>
    }
}
