use shared::{
    domain::{Course, CourseAverage, FormField, MenuItem, MenuItemId},
    error::ValidationError,
};

/// Insertion-ordered collection of menu items. Items are immutable once
/// added; the only mutations are append and remove.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: &str,
        course: Option<Course>,
        description: &str,
        price_text: &str,
    ) -> Result<MenuItem, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::MissingField(FormField::Name));
        }
        let Some(course) = course else {
            return Err(ValidationError::MissingField(FormField::Course));
        };
        if description.is_empty() {
            return Err(ValidationError::MissingField(FormField::Description));
        }
        if price_text.is_empty() {
            return Err(ValidationError::MissingField(FormField::Price));
        }
        let price = parse_price(price_text)?;

        let item = MenuItem {
            id: self.fresh_id(),
            name: name.to_string(),
            course,
            description: description.to_string(),
            price,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn remove(&mut self, id: MenuItemId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.remove(index);
        true
    }

    pub fn filter(&self, course: Option<Course>) -> Vec<MenuItem> {
        match course {
            None => self.items.clone(),
            Some(course) => self
                .items
                .iter()
                .filter(|item| item.course == course)
                .cloned()
                .collect(),
        }
    }

    pub fn averages_by_course(&self) -> Vec<CourseAverage> {
        Course::FORM_CHOICES
            .into_iter()
            .map(|course| {
                // Running mean: stays finite whenever every price is finite.
                let (average, count) = self
                    .items
                    .iter()
                    .filter(|item| item.course == course)
                    .fold((0.0_f64, 0_usize), |(mean, n), item| {
                        let n = n + 1;
                        (mean + (item.price - mean) / n as f64, n)
                    });
                CourseAverage {
                    course,
                    average,
                    count,
                }
            })
            .collect()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&self) -> MenuItemId {
        loop {
            let id = MenuItemId::generate();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

fn parse_price(price_text: &str) -> Result<f64, ValidationError> {
    let trimmed = price_text.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice(trimmed.to_string())),
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
