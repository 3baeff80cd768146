//! Animatable visual properties
//!
//! A [`PropertySet`] is a sparse target: only the properties that are `Some`
//! take part in a transition, everything else keeps animating (or resting)
//! where it is.

use serde::Serialize;

/// A single animatable property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Height,
    TranslateX,
    TranslateY,
    Opacity,
    Blur,
    Scale,
}

impl Property {
    pub const COUNT: usize = 6;

    pub const ALL: [Property; Property::COUNT] = [
        Property::Height,
        Property::TranslateX,
        Property::TranslateY,
        Property::Opacity,
        Property::Blur,
        Property::Scale,
    ];

    /// Slot in dense per-property storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unitless properties settle on a finer threshold than pixel ones
    pub fn rest_delta(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 0.001,
            _ => 0.01,
        }
    }
}

/// Target values for one transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PropertySet {
    pub height: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub opacity: Option<f32>,
    pub blur: Option<f32>,
    pub scale: Option<f32>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, value: f32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn translate_x(mut self, value: f32) -> Self {
        self.translate_x = Some(value);
        self
    }

    pub fn translate_y(mut self, value: f32) -> Self {
        self.translate_y = Some(value);
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn blur(mut self, value: f32) -> Self {
        self.blur = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn get(&self, property: Property) -> Option<f32> {
        match property {
            Property::Height => self.height,
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::Opacity => self.opacity,
            Property::Blur => self.blur,
            Property::Scale => self.scale,
        }
    }

    /// Properties that have a target, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        Property::ALL
            .into_iter()
            .filter_map(move |property| self.get(property).map(|value| (property, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
