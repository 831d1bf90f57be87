//! Seed the database with the starter vendor directory.
//!
//! Each starter vendor gets a demo owner user; seeding is idempotent and
//! skips any vendor whose owner email already exists.

use secrecy::SecretString;
use tracing::info;

use verdant_api::db::vendors::CreateVendor;
use verdant_api::db::{UserRepository, VendorRepository};

/// A starter vendor profile.
struct StarterVendor {
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    address: &'static str,
    owner_email: &'static str,
    rating: f64,
}

const STARTER_VENDORS: &[StarterVendor] = &[
    StarterVendor {
        name: "Green Valley Farms",
        description: "Family-owned farm specializing in organic produce",
        logo: "https://images.unsplash.com/photo-1595351298020-038700609878?w=800",
        address: "123 Farm Road, Valley City",
        owner_email: "greenvalley@seed.verdant.market",
        rating: 4.8,
    },
    StarterVendor {
        name: "Fresh Fields Market",
        description: "Local market with fresh, seasonal produce",
        logo: "https://images.unsplash.com/photo-1488459716781-31db52582fe9?w=800",
        address: "456 Market Street, Harvest Town",
        owner_email: "freshfields@seed.verdant.market",
        rating: 4.5,
    },
    StarterVendor {
        name: "Urban Garden Co",
        description: "Urban farming with hydroponically grown vegetables",
        logo: "https://images.unsplash.com/photo-1560493676-04071c5f467b?w=800",
        address: "789 City Center, Metro City",
        owner_email: "urbangarden@seed.verdant.market",
        rating: 4.7,
    },
];

/// Insert the starter vendors.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn vendors() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "MARKET_DATABASE_URL not set")?;

    let pool = verdant_api::db::create_pool(&database_url).await?;
    info!("Connected to database");

    let users = UserRepository::new(&pool);
    let vendor_repo = VendorRepository::new(&pool);

    let mut inserted = 0;
    for starter in STARTER_VENDORS {
        if users.get_by_email(starter.owner_email).await?.is_some() {
            info!(vendor = starter.name, "Already seeded, skipping");
            continue;
        }

        let owner = users.create(starter.owner_email, starter.name).await?;
        let vendor = vendor_repo
            .create(CreateVendor {
                name: starter.name,
                description: starter.description,
                logo: starter.logo,
                address: starter.address,
                user_id: owner.id,
                rating: starter.rating,
                is_verified: true,
            })
            .await?;

        info!(vendor_id = %vendor.id, vendor = starter.name, "Seeded vendor");
        inserted += 1;
    }

    info!(inserted, "Seeding complete");
    Ok(())
}
