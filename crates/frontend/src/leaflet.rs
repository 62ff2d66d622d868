//! Thin bindings to the global Leaflet object (`L`) loaded from the CDN.
//!
//! Option structs are plain serde types converted with `serde-wasm-bindgen`,
//! so field names follow Leaflet's camelCase options.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use waymark_shared::models::{Location, Viewport};
use waymark_shared::navigation::ViewportObserver;
use waymark_shared::route::Route;
use waymark_shared::viewport::{self, DEFAULT_ZOOM, FOCUS_ZOOM, MAX_NATIVE_ZOOM};

use crate::config::IconConfig;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[derive(Debug, Clone)]
    pub type Layer;

    #[derive(Debug, Clone)]
    pub type Icon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(lat_lngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn create_icon(options: &JsValue) -> Icon;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = setIcon)]
    fn set_icon(this: &Layer, icon: &Icon) -> Layer;

    #[wasm_bindgen(method, js_name = setZIndexOffset)]
    fn set_z_index_offset(this: &Layer, offset: f64) -> Layer;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    scroll_wheel_zoom: bool,
    // arrow keys step through the tour instead of panning
    keyboard: bool,
    max_zoom: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions {
    attribution: &'static str,
    max_zoom: f64,
    max_native_zoom: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerOptions<'a> {
    title: &'a str,
    alt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    close_on_click: bool,
    interactive: bool,
    max_width: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions<'a> {
    icon_url: &'a str,
    icon_retina_url: &'a str,
    shadow_url: &'a str,
    icon_size: [f64; 2],
    icon_anchor: [f64; 2],
    popup_anchor: [f64; 2],
    tooltip_anchor: [f64; 2],
    shadow_size: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<&'a str>,
}

/// Dashed route line between consecutive locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub dash_array: &'static str,
}

pub const ROUTE_STYLE: PolylineStyle = PolylineStyle {
    color: "#b34c62",
    weight: 4.0,
    opacity: 0.7,
    dash_array: "8, 12",
};

const ACTIVE_Z_OFFSET: f64 = 1000.0;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.to_string())
}

/// True once the Leaflet script has defined `window.L`.
pub fn is_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

/// Marker icons built once from an [`IconConfig`] and shared by every marker.
#[derive(Debug, Clone)]
pub struct MarkerIcons {
    pub default: Icon,
    pub active: Icon,
}

impl MarkerIcons {
    pub fn init(config: &IconConfig) -> Result<Self, String> {
        let options = |class_name: Option<&str>| {
            to_js(&IconOptions {
                icon_url: &config.icon_url,
                icon_retina_url: &config.icon_retina_url,
                shadow_url: &config.shadow_url,
                icon_size: [25.0, 41.0],
                icon_anchor: [12.0, 41.0],
                popup_anchor: [1.0, -34.0],
                tooltip_anchor: [16.0, -28.0],
                shadow_size: [41.0, 41.0],
                class_name,
            })
        };
        Ok(MarkerIcons {
            default: create_icon(&options(None)?),
            active: create_icon(&options(Some(config.active_class_name.as_str()))?),
        })
    }
}

/// A mounted Leaflet map showing one route.
pub struct MapHandle {
    map: LeafletMap,
    markers: Vec<Layer>,
    icons: MarkerIcons,
    active: Option<usize>,
}

impl MapHandle {
    /// Create the map inside `container_id` and draw markers, popups and the
    /// route line. The first location starts highlighted.
    pub fn mount(container_id: &str, route: &Route, icons: &IconConfig) -> Result<Self, String> {
        if !is_loaded() {
            return Err("Leaflet is not loaded".to_string());
        }
        let icons = MarkerIcons::init(icons)?;

        let map = create_map(
            container_id,
            &to_js(&MapOptions {
                scroll_wheel_zoom: true,
                keyboard: false,
                max_zoom: DEFAULT_ZOOM,
            })?,
        )
        .map_err(|e| format!("Failed to create map: {:?}", e))?;

        let Viewport { center, zoom } = viewport::initial_viewport(route);
        map.set_view(&to_js(&center.as_lat_lng())?, zoom);

        tile_layer(
            OSM_TILE_URL,
            &to_js(&TileLayerOptions {
                attribution: OSM_ATTRIBUTION,
                max_zoom: DEFAULT_ZOOM,
                max_native_zoom: MAX_NATIVE_ZOOM,
            })?,
        )
        .add_to(&map);

        let popup_options = to_js(&PopupOptions {
            close_on_click: false,
            interactive: true,
            max_width: 320.0,
        })?;

        let mut markers = Vec::with_capacity(route.len());
        for loc in &route.locations {
            let m = marker(
                &to_js(&loc.coordinate().as_lat_lng())?,
                &to_js(&MarkerOptions {
                    title: &loc.title,
                    alt: &loc.title,
                })?,
            );
            m.set_icon(&icons.default);
            m.bind_popup(&popup_html(loc), &popup_options);
            m.add_to(&map);
            markers.push(m);
        }

        let style = to_js(&ROUTE_STYLE)?;
        for seg in &route.segments {
            polyline(&to_js(&seg.lat_lngs())?, &style).add_to(&map);
        }

        tracing::debug!(
            markers = markers.len(),
            segments = route.segments.len(),
            "Map mounted"
        );

        let mut handle = MapHandle {
            map,
            markers,
            icons,
            active: None,
        };
        if !route.is_empty() {
            handle.highlight(0);
        }
        Ok(handle)
    }

    fn highlight(&mut self, index: usize) {
        if let Some(prev) = self.active.and_then(|i| self.markers.get(i)) {
            prev.set_icon(&self.icons.default);
            prev.set_z_index_offset(0.0);
        }
        if let Some(m) = self.markers.get(index) {
            m.set_icon(&self.icons.active);
            m.set_z_index_offset(ACTIVE_Z_OFFSET);
        }
        self.active = Some(index);
    }
}

impl ViewportObserver for MapHandle {
    fn focus(&mut self, index: usize, location: &Location) {
        self.highlight(index);
        match to_js(&location.coordinate().as_lat_lng()) {
            Ok(center) => {
                self.map.fly_to(&center, FOCUS_ZOOM);
            }
            Err(e) => tracing::warn!(error = %e, "Could not convert focus target"),
        }
        if let Some(m) = self.markers.get(index) {
            m.open_popup();
        }
    }
}

/// Escape text for interpolation into popup HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup body: bold title, description, then a scrolling strip of images.
pub fn popup_html(location: &Location) -> String {
    let title = escape_html(&location.title);
    let mut html = format!(
        "<strong>{}</strong><br/>{}",
        title,
        escape_html(&location.description)
    );
    if !location.images.is_empty() {
        html.push_str(r#"<div class="popup-images">"#);
        for (i, image) in location.images.iter().enumerate() {
            html.push_str(&format!(
                r#"<img src="{}" alt="{} - {}"/>"#,
                escape_html(image),
                title,
                i + 1
            ));
        }
        html.push_str("</div>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(title: &str, description: &str, images: &[&str]) -> Location {
        Location {
            id: 1,
            latitude: 42.0,
            longitude: -71.0,
            title: title.to_string(),
            description: description.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_popup_without_images() {
        let html = popup_html(&location("Quad", "Grass", &[]));
        assert_eq!(html, "<strong>Quad</strong><br/>Grass");
    }

    #[test]
    fn test_popup_images_numbered_from_one() {
        let html = popup_html(&location(
            "Library",
            "Books",
            &["/static/a.jpg", "/static/b.jpg"],
        ));
        assert!(html.contains(r#"<div class="popup-images">"#));
        assert!(html.contains(r#"<img src="/static/a.jpg" alt="Library - 1"/>"#));
        assert!(html.contains(r#"<img src="/static/b.jpg" alt="Library - 2"/>"#));
        assert!(html.find("a.jpg").unwrap() < html.find("b.jpg").unwrap());
    }

    #[test]
    fn test_popup_escapes_dataset_text() {
        let html = popup_html(&location("<script>", "a & b", &["x\".jpg"]));
        assert!(html.starts_with("<strong>&lt;script&gt;</strong>"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"src="x&quot;.jpg""#));
    }

    #[test]
    fn test_route_style() {
        assert_eq!(ROUTE_STYLE.color, "#b34c62");
        assert_eq!(ROUTE_STYLE.dash_array, "8, 12");
        assert!((ROUTE_STYLE.weight - 4.0).abs() < 1e-9);
        assert!((ROUTE_STYLE.opacity - 0.7).abs() < 1e-9);
    }
}
