use dioxus::prelude::*;
use waymark_shared::route::Route;

use crate::config::IconConfig;
use crate::leaflet::MapHandle;

pub const MAP_CONTAINER_ID: &str = "waymark-map";

/// Container for the Leaflet map. The map is created once the element is in
/// the DOM and its handle is published through `map`.
#[component]
pub fn MapView(route: Route, icons: IconConfig, map: Signal<Option<MapHandle>>) -> Element {
    let mut mount_error = use_signal(|| None::<String>);

    rsx! {
        div { class: "map-wrapper",
            div {
                id: MAP_CONTAINER_ID,
                class: "map",
                onmounted: move |_| {
                    if map.read().is_some() {
                        return;
                    }
                    match MapHandle::mount(MAP_CONTAINER_ID, &route, &icons) {
                        Ok(handle) => map.set(Some(handle)),
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to mount map");
                            mount_error.set(Some(e));
                        }
                    }
                },
            }
            if let Some(e) = &*mount_error.read() {
                div { class: "status error", "Map unavailable: {e}" }
            }
        }
    }
}
