// Read-only vehicle catalog. Seeded once at startup, never mutated.

use crate::models::{ListingType, Vehicle};

/// The fixed in-memory vehicle catalog. Constructed explicitly in `main`
/// and injected through `AppState`; there are no create/update/delete
/// operations by design.
#[derive(Debug)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Catalog { vehicles }
    }

    /// The mock inventory used by the site.
    pub fn seed() -> Self {
        Catalog::new(seed_vehicles())
    }

    /// Every vehicle, in insertion order.
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The promotional subsequence, preserving catalog order.
    pub fn featured(&self) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.featured).collect()
    }

    /// Linear scan by id. O(n), which is fine at this catalog size; a
    /// production-scale store would index by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    make: &str,
    model: &str,
    year: u32,
    price: u32,
    rental_rate: u32,
    mileage: u32,
    image: &str,
    listing_type: ListingType,
    transmission: &str,
    fuel_type: &str,
    body_type: &str,
    location: &str,
    featured: bool,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        price,
        rental_rate,
        mileage,
        image: image.to_string(),
        listing_type,
        transmission: transmission.to_string(),
        fuel_type: fuel_type.to_string(),
        body_type: body_type.to_string(),
        location: location.to_string(),
        featured,
    }
}

fn seed_vehicles() -> Vec<Vehicle> {
    use ListingType::{Buy, Rent};

    vec![
        vehicle(
            "1", "BMW", "M5 Competition", 2023, 110_995, 299, 1_250,
            "https://images.pexels.com/photos/3802510/pexels-photo-3802510.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Gasoline", "Sedan", "Los Angeles, CA", true,
        ),
        vehicle(
            "2", "Mercedes-Benz", "S-Class", 2023, 115_000, 325, 2_500,
            "https://images.pexels.com/photos/170811/pexels-photo-170811.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Hybrid", "Sedan", "Miami, FL", true,
        ),
        vehicle(
            "3", "Audi", "RS7", 2022, 125_000, 289, 5_600,
            "https://images.pexels.com/photos/1545743/pexels-photo-1545743.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Gasoline", "Coupe", "New York, NY", true,
        ),
        vehicle(
            "4", "Porsche", "911 Turbo S", 2023, 215_000, 450, 350,
            "https://images.pexels.com/photos/3608542/pexels-photo-3608542.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Gasoline", "Coupe", "Las Vegas, NV", true,
        ),
        vehicle(
            "5", "Lamborghini", "Urus", 2022, 229_495, 599, 3_200,
            "https://images.pexels.com/photos/3786091/pexels-photo-3786091.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Gasoline", "SUV", "Miami, FL", true,
        ),
        vehicle(
            "6", "Tesla", "Model S Plaid", 2023, 129_990, 249, 1_800,
            "https://images.pexels.com/photos/2920064/pexels-photo-2920064.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Buy, "Automatic", "Electric", "Sedan", "San Francisco, CA", false,
        ),
        vehicle(
            "7", "Range Rover", "Sport", 2023, 95_000, 275, 4_500,
            "https://images.pexels.com/photos/116675/pexels-photo-116675.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Diesel", "SUV", "Chicago, IL", true,
        ),
        vehicle(
            "8", "Ferrari", "F8 Tributo", 2022, 276_550, 799, 1_200,
            "https://images.pexels.com/photos/337909/pexels-photo-337909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Gasoline", "Coupe", "Los Angeles, CA", true,
        ),
        vehicle(
            "9", "Bentley", "Continental GT", 2023, 235_000, 599, 2_100,
            "https://images.pexels.com/photos/244206/pexels-photo-244206.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Gasoline", "Coupe", "New York, NY", true,
        ),
        vehicle(
            "10", "Lexus", "LS 500h", 2022, 82_000, 199, 8_500,
            "https://images.pexels.com/photos/1592384/pexels-photo-1592384.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Hybrid", "Sedan", "Dallas, TX", false,
        ),
        vehicle(
            "11", "Porsche", "Taycan", 2023, 105_150, 299, 1_500,
            "https://images.pexels.com/photos/3136673/pexels-photo-3136673.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Electric", "Sedan", "San Francisco, CA", false,
        ),
        vehicle(
            "12", "Maserati", "GranTurismo", 2022, 172_000, 389, 3_200,
            "https://images.pexels.com/photos/7621733/pexels-photo-7621733.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Rent, "Automatic", "Gasoline", "Coupe", "Miami, FL", false,
        ),
    ]
}
