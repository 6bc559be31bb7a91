use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::validation::{check_len, ok_or, ValidationError};
use crate::utils::constants::{
    ACTION_LABEL_MAX_LEN, ACTION_TEXT_MAX_LEN, NAME_MAX_LEN, RICH_MENU_FULL_HEIGHT,
    RICH_MENU_FULL_WIDTH, RICH_MENU_HALF_HEIGHT,
};

/// Canvas dimensions of the tappable image menu, platform-defined.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RichMenuSize {
    pub width: u32,
    pub height: u32,
}

impl RichMenuSize {
    pub fn full() -> Self {
        Self { width: RICH_MENU_FULL_WIDTH, height: RICH_MENU_FULL_HEIGHT }
    }

    pub fn half() -> Self {
        Self { width: RICH_MENU_FULL_WIDTH, height: RICH_MENU_HALF_HEIGHT }
    }
}

/// Predefined grid layouts offered by the editor.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum RichMenuTemplate {
    #[serde(rename = "2x3")]
    TwoByThree,
    #[serde(rename = "1x3")]
    OneByThree,
    #[serde(rename = "2x2")]
    TwoByTwo,
}

impl RichMenuTemplate {
    pub fn rows_cols(&self) -> (u32, u32) {
        match self {
            RichMenuTemplate::TwoByThree => (2, 3),
            RichMenuTemplate::OneByThree => (1, 3),
            RichMenuTemplate::TwoByTwo => (2, 2),
        }
    }

    pub fn default_size(&self) -> RichMenuSize {
        match self {
            RichMenuTemplate::OneByThree => RichMenuSize::half(),
            _ => RichMenuSize::full(),
        }
    }

    /// Cell bounds tiling the canvas exactly; trailing cells absorb the
    /// division remainder.
    pub fn grid(&self, size: RichMenuSize) -> Vec<RichMenuBounds> {
        let (rows, cols) = self.rows_cols();
        let cell_w = size.width / cols;
        let cell_h = size.height / rows;

        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let width = if col == cols - 1 { size.width - cell_w * col } else { cell_w };
                let height = if row == rows - 1 { size.height - cell_h * row } else { cell_h };
                cells.push(RichMenuBounds {
                    x: col * cell_w,
                    y: row * cell_h,
                    width,
                    height,
                });
            }
        }
        cells
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RichMenuBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RichMenuBounds {
    pub fn fits_within(&self, size: RichMenuSize) -> bool {
        self.width > 0
            && self.height > 0
            && self.x + self.width <= size.width
            && self.y + self.height <= size.height
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RichMenuActionType {
    Uri,
    Message,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RichMenuAction {
    #[serde(rename = "type")]
    pub action_type: RichMenuActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RichMenuAction {
    fn validate(&self, field: &str, errors: &mut Vec<ValidationError>) {
        match self.action_type {
            RichMenuActionType::Uri => {
                match &self.uri {
                    None => errors.push(ValidationError::new(field, "uri action needs a uri")),
                    Some(uri) if !uri.starts_with("https://") && !uri.starts_with("http://") => {
                        errors.push(ValidationError::new(field, "uri must be an absolute URL"))
                    }
                    _ => {}
                }
            }
            RichMenuActionType::Message => {
                if self.text.as_deref().map_or(true, |t| t.trim().is_empty()) {
                    errors.push(ValidationError::new(field, "message action needs text"));
                }
            }
        }
        if let Some(label) = &self.label {
            if label.chars().count() > ACTION_LABEL_MAX_LEN {
                errors.push(ValidationError::new(
                    field,
                    format!("label must be at most {} characters", ACTION_LABEL_MAX_LEN),
                ));
            }
        }
        if let Some(text) = &self.text {
            if text.chars().count() > ACTION_TEXT_MAX_LEN {
                errors.push(ValidationError::new(
                    field,
                    format!("text must be at most {} characters", ACTION_TEXT_MAX_LEN),
                ));
            }
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RichMenuArea {
    pub bounds: RichMenuBounds,
    pub action: RichMenuAction,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RichMenu {
    pub id: Uuid,
    pub name: String,
    pub template: RichMenuTemplate,
    pub size: RichMenuSize,
    pub areas: Vec<RichMenuArea>,
    /// Whether this menu is the one currently assigned to the account.
    pub selected: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRichMenuRequest {
    pub name: String,
    pub template: RichMenuTemplate,
    pub size: RichMenuSize,
    pub areas: Vec<RichMenuArea>,
}

impl CreateRichMenuRequest {
    /// Builds a request whose areas follow the template grid, with every
    /// cell left as a message action to be filled in by the editor.
    pub fn from_template(name: impl Into<String>, template: RichMenuTemplate) -> Self {
        let size = template.default_size();
        let areas = template
            .grid(size)
            .into_iter()
            .map(|bounds| RichMenuArea {
                bounds,
                action: RichMenuAction {
                    action_type: RichMenuActionType::Message,
                    uri: None,
                    label: None,
                    text: None,
                },
            })
            .collect();
        Self { name: name.into(), template, size, areas }
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_len("name", &self.name, NAME_MAX_LEN, &mut errors);
        if self.areas.is_empty() {
            errors.push(ValidationError::new("areas", "at least one tappable area is required"));
        }
        for (i, area) in self.areas.iter().enumerate() {
            let field = format!("areas[{}]", i);
            if !area.bounds.fits_within(self.size) {
                errors.push(ValidationError::new(&field, "bounds exceed the menu canvas"));
            }
            area.action.validate(&field, &mut errors);
        }
        ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_tile_the_canvas_exactly() {
        for template in [
            RichMenuTemplate::TwoByThree,
            RichMenuTemplate::OneByThree,
            RichMenuTemplate::TwoByTwo,
        ] {
            let size = template.default_size();
            let cells = template.grid(size);
            let (rows, cols) = template.rows_cols();
            assert_eq!(cells.len(), (rows * cols) as usize);

            let area_sum: u64 = cells
                .iter()
                .map(|c| c.width as u64 * c.height as u64)
                .sum();
            assert_eq!(area_sum, size.width as u64 * size.height as u64);
            assert!(cells.iter().all(|c| c.fits_within(size)));
        }
    }

    #[test]
    fn template_serializes_as_grid_label() {
        let json = serde_json::to_string(&RichMenuTemplate::TwoByThree).expect("should encode");
        assert_eq!(json, r#""2x3""#);
        let back: RichMenuTemplate = serde_json::from_str(r#""1x3""#).expect("should decode");
        assert_eq!(back, RichMenuTemplate::OneByThree);
    }

    #[test]
    fn out_of_canvas_bounds_are_rejected() {
        let mut req = CreateRichMenuRequest::from_template("Main menu", RichMenuTemplate::TwoByTwo);
        for area in &mut req.areas {
            area.action.text = Some("shop".to_string());
        }
        assert!(req.validate().is_ok());

        req.areas[0].bounds.width = RICH_MENU_FULL_WIDTH + 1;
        let errors = req.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("canvas")));
    }

    #[test]
    fn uri_action_requires_absolute_url() {
        let mut req = CreateRichMenuRequest::from_template("Links", RichMenuTemplate::OneByThree);
        for area in &mut req.areas {
            area.action = RichMenuAction {
                action_type: RichMenuActionType::Uri,
                uri: Some("https://shop.example.com".to_string()),
                label: Some("Shop".to_string()),
                text: None,
            };
        }
        assert!(req.validate().is_ok());

        req.areas[1].action.uri = Some("/relative".to_string());
        assert!(req.validate().is_err());
    }
}
