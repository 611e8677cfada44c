use crate::generators::GeneratedValue;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

const VIN_LENGTH: usize = 17;
// I, O and Q are never used in VINs.
const VIN_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// 17-character VIN, one independent draw per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VinGenerator;

impl VinGenerator {
    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let vin: String = (0..VIN_LENGTH)
            .map(|position| {
                provider
                    .one_of(&ctx.variant(&format!("vin{position}")), VIN_ALPHABET)
                    .copied()
                    .unwrap_or('0')
            })
            .collect();
        GeneratedValue::Text(vin)
    }
}

pub const CAR_MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "Nissan",
    "Hyundai",
    "Kia",
    "Volkswagen",
    "Subaru",
    "Mazda",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Tesla",
    "Jeep",
    "Volvo",
];

pub const CAR_MODELS: &[&str] = &[
    "Camry",
    "Corolla",
    "RAV4",
    "Civic",
    "Accord",
    "CR-V",
    "F-150",
    "Mustang",
    "Explorer",
    "Silverado",
    "Malibu",
    "Altima",
    "Elantra",
    "Sorento",
    "Golf",
    "Outback",
    "CX-5",
    "3 Series",
    "C-Class",
    "A4",
    "Model 3",
    "Wrangler",
    "XC90",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakerValues;

    #[test]
    fn vin_has_valid_shape() {
        let provider = FakerValues::new();
        for row in 0..50 {
            let ctx = SeedContext::new("demo", "vin", row);
            let value = VinGenerator.generate(&provider, ctx);
            let vin = value.as_str().expect("vin text");
            assert_eq!(vin.len(), VIN_LENGTH);
            assert!(vin.chars().all(|ch| VIN_ALPHABET.contains(&ch)));
        }
    }
}
