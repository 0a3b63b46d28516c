//! Dropzones as entered in the form: the free-text vertices and debris points,
//! one per line, turned into the points ready to be drawn on the map.

use hazard_coords_types::{CompactToken, GeoCoordinate};
use log::debug;

use crate::{
    consts::{MAX_DEBRIS, MAX_VERTICES, MIN_POLYGON_VERTICES, NUM_DROPZONES},
    format::compact_token,
    parser::parse_coordinate,
};

/// Non-blank trimmed lines of the text area
fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse every line, silently skipping the ones that are not points
fn parsed_points(id: &str, lines: &[String]) -> Vec<GeoCoordinate> {
    lines
        .iter()
        .filter_map(|line| match parse_coordinate(line) {
            Ok(coord) => Some(coord),
            Err(err) => {
                debug!("{id}: skipping {line:?}: {err}");
                None
            }
        })
        .collect()
}

/// The area where the spent stages are expected to fall
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dropzone {
    id: String,
    vertices: Vec<String>,
    debris: Vec<String>,
}

impl Dropzone {
    /// The dropzone without any data
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The dropzone from the contents of the text areas (one point per line)
    pub fn from_text(id: impl Into<String>, vertices: &str, debris: &str) -> Self {
        Self {
            id: id.into(),
            vertices: lines(vertices),
            debris: lines(debris),
        }
    }

    /// The empty dropzones of the form: `DZ1`, `DZ2`, ...
    pub fn form_set() -> Vec<Self> {
        (1..=NUM_DROPZONES)
            .map(|i| Self::new(format!("DZ{i}")))
            .collect()
    }

    /// Identifier of the dropzone
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw text of the vertices
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Raw text of the debris points
    pub fn debris(&self) -> &[String] {
        &self.debris
    }

    /// More vertices or debris points were entered than the form allows
    pub fn exceeds_limits(&self) -> bool {
        self.vertices.len() > MAX_VERTICES || self.debris.len() > MAX_DEBRIS
    }

    /// The polygon made of the parsable vertices.
    ///
    /// `None` when less than 3 vertices could be parsed:
    /// such a dropzone is not drawn at all.
    pub fn polygon(&self) -> Option<Polygon> {
        let vertices = parsed_points(&self.id, &self.vertices);
        if vertices.len() < MIN_POLYGON_VERTICES {
            debug!(
                "{}: only {} valid vertices, not a polygon",
                self.id,
                vertices.len()
            );
            return None;
        }

        Some(Polygon {
            id: self.id.clone(),
            vertices,
        })
    }

    /// The parsable debris points
    pub fn debris_points(&self) -> Vec<GeoCoordinate> {
        parsed_points(&self.id, &self.debris)
    }

    /// The compact tokens of the parsable vertices, for the export
    pub fn compact_vertices(&self) -> Vec<CompactToken> {
        self.vertices
            .iter()
            .filter_map(|line| compact_token(line).ok())
            .collect()
    }
}

/// The dropzone ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    id: String,
    vertices: Vec<GeoCoordinate>,
}

impl Polygon {
    /// Identifier of the dropzone
    pub fn id(&self) -> &str {
        &self.id
    }

    /// At least 3 points
    pub fn vertices(&self) -> &[GeoCoordinate] {
        &self.vertices
    }
}

/// The average of all the vertices of all the polygons, to center the map on.
/// `None` if there are no polygons.
pub fn map_center<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> Option<GeoCoordinate> {
    let (count, lat_sum, lon_sum) = polygons
        .into_iter()
        .flat_map(Polygon::vertices)
        .fold((0_u32, 0.0, 0.0), |(count, lat, lon), v| {
            (count + 1, lat + v.latitude(), lon + v.longitude())
        });

    if count == 0 {
        return None;
    }

    let count = f64::from(count);
    GeoCoordinate::new(lat_sum / count, lon_sum / count).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "
        13.5 N, 121.2 E
        N1400E12200

        134523N 1210715E
    ";

    #[test]
    fn blank_lines_are_ignored() {
        let dz = Dropzone::from_text("DZ1", TRIANGLE, "  \n");
        assert_eq!(dz.id(), "DZ1");
        assert_eq!(dz.vertices().len(), 3);
        assert_eq!(dz.vertices()[1], "N1400E12200");
        assert!(dz.debris().is_empty());
    }

    #[test]
    fn polygon() {
        let dz = Dropzone::from_text("DZ1", TRIANGLE, "");
        let polygon = dz.polygon().unwrap();
        assert_eq!(polygon.id(), "DZ1");

        let vertices: Vec<(f64, f64)> = polygon.vertices().iter().map(|&v| v.into()).collect();
        assert_eq!(
            vertices,
            vec![(13.5, 121.2), (14.0, 122.0), (13.756_389, 121.120_833)]
        );
    }

    #[test]
    fn invalid_vertices_are_dropped() {
        let dz = Dropzone::from_text("DZ2", "13.5 N 121.2 E\nfoo\n14 N 122 E\n91 N 0 E", "");
        assert!(dz.polygon().is_none());

        let dz = Dropzone::from_text("DZ2", "0 0\n0 1\n1 1\nfoo", "");
        assert_eq!(dz.polygon().unwrap().vertices().len(), 3);
    }

    #[test]
    fn debris() {
        let dz = Dropzone::from_text("DZ3", "", "13.5 N 121.2 E\nbar");
        let debris: Vec<(f64, f64)> = dz.debris_points().into_iter().map(Into::into).collect();
        assert_eq!(debris, vec![(13.5, 121.2)]);
    }

    #[test]
    fn compact_vertices() {
        let dz = Dropzone::from_text("DZ1", TRIANGLE, "");
        let tokens: Vec<String> = dz
            .compact_vertices()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tokens, vec!["N1330E12112", "N1400E12200", "N1345E12107"]);
    }

    #[test]
    fn form_set() {
        let ids: Vec<String> = Dropzone::form_set()
            .iter()
            .map(|dz| dz.id().to_owned())
            .collect();
        assert_eq!(ids, vec!["DZ1", "DZ2", "DZ3", "DZ4"]);
    }

    #[test]
    fn limits() {
        let dz = Dropzone::from_text("DZ1", TRIANGLE, "1 1\n2 2\n3 3\n4 4");
        assert!(!dz.exceeds_limits());

        let dz = Dropzone::from_text("DZ1", TRIANGLE, "1 1\n2 2\n3 3\n4 4\n5 5");
        assert!(dz.exceeds_limits());
    }

    #[test]
    fn center() {
        let first = Dropzone::from_text("DZ1", "0 0\n0 2\n2 2\n2 0", "")
            .polygon()
            .unwrap();
        let second = Dropzone::from_text("DZ2", "10 10\n10 10\n10 10\n10 10", "")
            .polygon()
            .unwrap();

        let center = map_center(&[first, second]).unwrap();
        assert_eq!(center.latitude(), 5.5);
        assert_eq!(center.longitude(), 5.5);
    }

    #[test]
    fn no_center() {
        assert!(map_center(std::iter::empty()).is_none());
        let nothing = Dropzone::from_text("DZ1", "foo", "").polygon();
        assert!(map_center(nothing.iter()).is_none());
    }
}
