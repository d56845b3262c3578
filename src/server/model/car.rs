use crate::{
    model::{
        api::Links,
        car::{CarDto, CarQueryDto, CreateCarDto, PatchCarDto},
    },
    server::{error::AppError, model::validate},
};

#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub registration: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CreateCarParams {
    pub fn from_dto(dto: CreateCarDto) -> Result<Self, AppError> {
        validate::non_empty(&dto.registration, "Registration cannot be empty")?;

        Ok(Self {
            registration: dto.registration,
            brand: dto.brand,
            color: dto.color,
            price: dto.price,
            description: dto.description,
            image: dto.image,
        })
    }
}

/// Partial update: only supplied fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct PatchCarParams {
    pub registration: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PatchCarParams {
    pub fn from_dto(dto: PatchCarDto) -> Result<Self, AppError> {
        if let Some(registration) = &dto.registration {
            validate::non_empty(registration, "Registration cannot be empty")?;
        }

        Ok(Self {
            registration: dto.registration,
            brand: dto.brand,
            color: dto.color,
            price: dto.price,
            description: dto.description,
            image: dto.image,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    Ascending,
    Descending,
}

/// Listing filter built from query parameters; unknown sort values are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    pub color: Option<String>,
    pub brand: Option<String>,
    pub sort: Option<PriceSort>,
}

impl CarFilter {
    pub fn from_dto(dto: CarQueryDto) -> Self {
        let sort = match dto.sort.as_deref() {
            Some("asc") => Some(PriceSort::Ascending),
            Some("desc") => Some(PriceSort::Descending),
            _ => None,
        };

        Self {
            color: dto.color,
            brand: dto.brand,
            sort,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    pub id: i32,
    pub registration: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Car {
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            registration: entity.registration,
            brand: entity.brand,
            color: entity.color,
            price: entity.price,
            description: entity.description,
            image: entity.image,
        }
    }

    pub fn into_dto(self, links: Option<Links>) -> CarDto {
        CarDto {
            id: self.id,
            registration: self.registration,
            brand: self.brand,
            color: self.color,
            price: self.price,
            description: self.description,
            image: self.image,
            links,
        }
    }
}
