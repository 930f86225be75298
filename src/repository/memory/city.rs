use async_trait::async_trait;

use crate::error::Result;
use crate::models::city::City;
use crate::repository::CityRepository;

pub struct MemoryCityRepository {
    cities: Vec<City>,
}

impl MemoryCityRepository {
    pub fn new() -> Self {
        Self {
            cities: vec![
                City::new(1, "Москва"),
                City::new(2, "Санкт-Петербург"),
                City::new(3, "Екатеринбург"),
            ],
        }
    }
}

impl Default for MemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRepository for MemoryCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        Ok(self.cities.clone())
    }
}
