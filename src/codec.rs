//! Mapping between a [`Scene`] and its file representation.
//!
//! A document is a versioned list of flat shape records in paint order:
//!
//! ```json
//! { "version": 1,
//!   "shapes": [
//!     { "kind": "stroke", "id": 1, "group": 1, "points": [[0, 0], [4, 2]],
//!       "color": "black", "width": 4 },
//!     { "kind": "text", "id": 2, "points": [[10, 10]], "content": "hi",
//!       "fontFamily": "Arial", "fontSize": 16, "color": "red" } ] }
//! ```
//!
//! Only the attributes a kind owns are written; decoding rejects records that
//! lack one of them.

use serde::{Deserialize, Serialize};

use crate::element::{
    Color, Element, ElementId, ElementType, FontSpec, GroupId, MIN_POLYGON_VERTICES, ShapeKind, ShapeStyle,
    StrokeStyle, factory,
};
use crate::error::{Result, SketchError};
use crate::geometry::{MAX_COORDINATE, Point};
use crate::id_generator::MAX_ID;
use crate::scene::Scene;

pub const FORMAT_VERSION: u32 = 1;

/// The whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub version: u32,
    pub shapes: Vec<ShapeRecord>,
}

/// One shape as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    pub kind: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<Vec<[f64; 2]>>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn encode_points(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x(), p.y()]).collect()
}

fn encode_style(record: &mut ShapeRecord, style: &ShapeStyle) {
    record.color = style.fill.to_string();
    record.outline = style.outline.as_ref().map(Color::to_string);
    record.width = Some(style.width);
}

/// Flatten one shape into its record.
pub fn encode_shape(shape: &ElementType) -> ShapeRecord {
    let mut record = ShapeRecord {
        kind: shape.element_type().to_string(),
        id: shape.id().0,
        color: shape.color().to_string(),
        ..Default::default()
    };

    match shape {
        ElementType::Stroke(stroke) => {
            record.group = Some(stroke.group().0);
            record.points = Some(encode_points(stroke.points()));
            record.width = Some(stroke.width());
        }
        ElementType::Polygon(polygon) => {
            record.points = Some(encode_points(polygon.vertices()));
            encode_style(&mut record, polygon.style());
        }
        ElementType::Rectangle(boxed) | ElementType::Ellipse(boxed) => {
            record.corners = Some(encode_points(&boxed.corners()));
            encode_style(&mut record, boxed.style());
        }
        ElementType::Text(text) => {
            record.points = Some(encode_points(&[text.anchor()]));
            record.content = Some(text.content().to_string());
            record.font_family = Some(text.font().family.clone());
            record.font_size = Some(text.font().size);
        }
    }

    record
}

/// Produce the document for a scene, one record per shape in paint order.
pub fn serialize(scene: &Scene) -> SceneDocument {
    SceneDocument {
        version: FORMAT_VERSION,
        shapes: scene.all().map(encode_shape).collect(),
    }
}

fn required<T>(value: Option<T>, field: &str, record: &ShapeRecord) -> Result<T> {
    value.ok_or_else(|| {
        SketchError::malformed(format!("{} record {} is missing '{}'", record.kind, record.id, field))
    })
}

fn finite(value: f64, field: &str, record: &ShapeRecord) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SketchError::malformed(format!(
            "{} record {} has a non-finite '{}'",
            record.kind, record.id, field
        )))
    }
}

fn coordinate(value: f64, field: &str, record: &ShapeRecord) -> Result<f64> {
    let value = finite(value, field, record)?;
    if value.abs() > MAX_COORDINATE {
        return Err(SketchError::malformed(format!(
            "{} record {} has a coordinate {} outside +/-{} in '{}'",
            record.kind, record.id, value, MAX_COORDINATE, field
        )));
    }
    Ok(value)
}

fn decode_points(raw: &[[f64; 2]], field: &str, record: &ShapeRecord) -> Result<Vec<Point>> {
    raw.iter()
        .map(|&[x, y]| -> Result<Point> {
            Ok(Point::new(coordinate(x, field, record)?, coordinate(y, field, record)?))
        })
        .collect()
}

fn identity(value: u64, field: &str, record: &ShapeRecord) -> Result<u64> {
    if value > MAX_ID {
        return Err(SketchError::malformed(format!(
            "{} record has {} {} above the limit {}",
            record.kind, field, value, MAX_ID
        )));
    }
    Ok(value)
}

fn decode_style(record: &ShapeRecord) -> Result<ShapeStyle> {
    let width = finite(required(record.width, "width", record)?, "width", record)?;
    Ok(ShapeStyle {
        fill: Color::new(record.color.as_str()),
        outline: record.outline.as_deref().map(Color::new),
        width,
    })
}

/// Rebuild one shape from its record, validating everything the kind needs.
pub fn decode_shape(record: &ShapeRecord) -> Result<ElementType> {
    let kind: ShapeKind = record.kind.parse().map_err(SketchError::MalformedDocument)?;
    let id = ElementId(identity(record.id, "id", record)?);

    let shape = match kind {
        ShapeKind::Stroke => {
            let group = GroupId(identity(required(record.group, "group", record)?, "group", record)?);
            let points = decode_points(required(record.points.as_ref(), "points", record)?, "points", record)?;
            if points.len() < 2 {
                return Err(SketchError::malformed(format!(
                    "stroke record {} has {} points, needs at least 2",
                    record.id,
                    points.len()
                )));
            }
            let width = finite(required(record.width, "width", record)?, "width", record)?;
            factory::create_stroke(id, group, points, StrokeStyle::new(record.color.as_str(), width))
        }
        ShapeKind::Polygon => {
            let vertices = decode_points(required(record.points.as_ref(), "points", record)?, "points", record)?;
            let count = vertices.len();
            factory::create_polygon(id, vertices, decode_style(record)?).ok_or_else(|| {
                SketchError::malformed(format!(
                    "polygon record {} has {} vertices, needs at least {}",
                    record.id, count, MIN_POLYGON_VERTICES
                ))
            })?
        }
        ShapeKind::Rectangle | ShapeKind::Ellipse => {
            let corners = decode_points(required(record.corners.as_ref(), "corners", record)?, "corners", record)?;
            let [a, b] = <[Point; 2]>::try_from(corners).map_err(|corners| {
                SketchError::malformed(format!(
                    "{} record {} has {} corners, needs exactly 2",
                    record.kind,
                    record.id,
                    corners.len()
                ))
            })?;
            let style = decode_style(record)?;
            if kind == ShapeKind::Rectangle {
                factory::create_rectangle(id, a, b, style)
            } else {
                factory::create_ellipse(id, a, b, style)
            }
        }
        ShapeKind::Text => {
            let anchor = decode_points(required(record.points.as_ref(), "points", record)?, "points", record)?;
            let [anchor] = <[Point; 1]>::try_from(anchor).map_err(|_| {
                SketchError::malformed(format!("text record {} needs exactly one anchor point", record.id))
            })?;
            let content = required(record.content.clone(), "content", record)?;
            let family = required(record.font_family.clone(), "fontFamily", record)?;
            let size = finite(required(record.font_size, "fontSize", record)?, "fontSize", record)?;
            factory::create_text(
                id,
                anchor,
                content,
                FontSpec::new(family, size),
                Color::new(record.color.as_str()),
            )
        }
    };

    Ok(shape)
}

/// Rebuild a scene from a document. Fails without producing anything on the
/// first invalid record.
pub fn deserialize(document: &SceneDocument) -> Result<Scene> {
    if document.version != FORMAT_VERSION {
        return Err(SketchError::malformed(format!(
            "unsupported document version {}",
            document.version
        )));
    }

    let mut scene = Scene::new();
    for record in &document.shapes {
        let shape = decode_shape(record)?;
        if !scene.insert(shape) {
            return Err(SketchError::malformed(format!("duplicate shape id {}", record.id)));
        }
    }
    Ok(scene)
}

pub fn to_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serialize(scene))?)
}

pub fn from_json(text: &str) -> Result<Scene> {
    let document: SceneDocument =
        serde_json::from_str(text).map_err(|e| SketchError::malformed(e.to_string()))?;
    deserialize(&document)
}
