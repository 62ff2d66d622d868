use dioxus::prelude::*;
use waymark_shared::navigation::{Direction, Tour};
use waymark_shared::route::Route;

use crate::api;
use crate::components::map_view::MapView;
use crate::components::nav_controls::{position_label, NavControls};
use crate::config::{AppConfig, IconConfig};
use crate::leaflet::MapHandle;

#[component]
pub fn TourPage() -> Element {
    let config = use_hook(AppConfig::from_build_env);

    let base_path = config.base_path.clone();
    let locations_resource = use_resource(move || {
        let base_path = base_path.clone();
        async move {
            let result = api::fetch_locations(&base_path).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Failed to load locations");
            }
            result
        }
    });

    let state = (*locations_resource.read()).clone();
    match state {
        None => rsx! {
            div { class: "status", "Loading locations..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "status error", "Could not load locations: {e}" }
        },
        Some(Ok(locations)) => {
            let route = Route::build(&locations, &config.base_path);
            rsx! {
                TourView { route, icons: config.icons.clone() }
            }
        }
    }
}

/// Move the cursor and let the map follow. The cursor still moves when the
/// map failed to mount.
fn step(mut tour: Signal<Tour>, mut map: Signal<Option<MapHandle>>, direction: Direction) {
    let mut handle = map.write();
    tour.write().navigate(direction, &mut *handle);
}

#[component]
fn TourView(route: Route, icons: IconConfig) -> Element {
    let tour = use_signal(|| Tour::new(route.clone()));
    let map = use_signal(|| None::<MapHandle>);

    let (len, label) = {
        let t = tour.read();
        let len = t.route().len();
        let label = match (t.current_index(), t.current_location()) {
            (Some(i), Some(loc)) => Some(position_label(i, len, &loc.title)),
            _ => None,
        };
        (len, label)
    };

    rsx! {
        div {
            class: "app",
            tabindex: "0",
            onkeydown: move |evt: Event<KeyboardData>| match evt.key() {
                Key::ArrowRight => step(tour, map, Direction::Forward),
                Key::ArrowLeft => step(tour, map, Direction::Backward),
                _ => {}
            },

            div { class: "header",
                h1 { "Waymark" }
                NavControls {
                    label,
                    disabled: len == 0,
                    on_previous: move |_| step(tour, map, Direction::Backward),
                    on_next: move |_| step(tour, map, Direction::Forward),
                }
            }

            MapView { route, icons, map }
        }
    }
}
