pub const DEFAULT_ZOOM: u8 = 15;
pub const LOCATION_ZOOM: u8 = 17;

#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub name: &'static str,
    pub address: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const HOME_BASE: Landmark = Landmark {
    name: "VIT Bhopal Boys Hostel",
    address: "Bhopal-Indore Highway, Kothrikalan, Madhya Pradesh 466114",
    latitude: 23.0774,
    longitude: 76.8511,
};

/// Static marker with two concentric radius overlays around it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub landmark: Landmark,
    pub zoom: u8,
    pub overlay_radii_m: [u32; 2],
}

impl Default for MapView {
    fn default() -> MapView {
        MapView {
            landmark: HOME_BASE,
            zoom: DEFAULT_ZOOM,
            overlay_radii_m: [800, 1600],
        }
    }
}

impl MapView {
    /// Re-centres on the landmark at street level.
    pub fn zoom_to_location(&mut self) {
        self.zoom = LOCATION_ZOOM;
    }
}
