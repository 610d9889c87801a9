use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CourseParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub Uuid);

impl MenuItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Starter,
    Main,
    Dessert,
    Beverage,
    Other,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Starter,
        Course::Main,
        Course::Dessert,
        Course::Beverage,
        Course::Other,
    ];

    /// Courses offered by the add form and filter chips. Averages are
    /// reported for exactly these, in this order.
    pub const FORM_CHOICES: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
            Course::Other => "Other",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = CourseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CourseParseError::UnknownCourse(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub course: Course,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseAverage {
    pub course: Course,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Course,
    Description,
    Price,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "item name",
            FormField::Course => "course type",
            FormField::Description => "description",
            FormField::Price => "price",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
