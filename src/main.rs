//! # Homestay Rental Demo
//!
//! Seeds a [`HomestaySystem`] and walks through a scripted desk session:
//! 1. Searching by price and resetting.
//! 2. Confirming a rental without a guest, then with one.
//! 3. Renting by typed name, sorting, adding a unit and checking out.
//!
//! The seed comes from the first argument or `HOMESTAY_SEED`, falling back to the
//! built-in catalog.

use homestay_rental::lifecycle::{setup_tracing, HomestaySystem, SystemConfig, SEED_ENV_VAR};
use homestay_rental::model::{FilterCriteria, GuestId, HomestayDraft, HomestayId, HomestayUnit};
use tracing::{info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    let seed_path = std::env::args().nth(1).or_else(|| std::env::var(SEED_ENV_VAR).ok());
    let config = match seed_path {
        Some(path) => {
            info!(%path, "Loading seed");
            SystemConfig::load(&path).map_err(|e| e.to_string())?
        }
        None => SystemConfig::default(),
    };
    let mut system = HomestaySystem::new(config).map_err(|e| e.to_string())?;

    print_guests(&system);
    print_view("Catalog", &system.view());

    let riverside = HomestayId(3);
    let found = system.search(FilterCriteria::any().with_price(750000));
    print_view("Search price = 750000", &found);

    system.begin_rental(riverside).map_err(|e| e.to_string())?;
    if let Err(e) = system.confirm_rental(riverside) {
        warn!(error = %e, "Rental rejected");
    }
    system.choose_guest_candidate(GuestId(2)).map_err(|e| e.to_string())?;
    system.confirm_rental(riverside).map_err(|e| e.to_string())?;

    system.reset();
    if let Err(e) = system.rent_by_name(HomestayId(1), "Jane Doe") {
        warn!(error = %e, "Rental rejected");
    }
    system.rent_by_name(HomestayId(1), "  john smith ").map_err(|e| e.to_string())?;

    let draft = HomestayDraft::from_values("Lakeside Loft", 640000, "9 Hai Ba Trung St, Hue", 2);
    let new_id = system.add_unit(draft).map_err(|e| e.to_string())?;
    info!(%new_id, "Unit added");

    let sorted = system.toggle_sort();
    print_view("Sorted by price (ascending)", &sorted);

    system.checkout(riverside).map_err(|e| e.to_string())?;
    print_view("After checkout", &system.reset());

    info!("Session complete");
    Ok(())
}

fn print_guests(system: &HomestaySystem) {
    println!("Guests");
    for guest in system.guests() {
        println!("  {:>3}  {:<16} {:<12} {}", guest.id.0, guest.name, guest.phone, guest.email);
    }
    println!();
}

fn print_view(title: &str, view: &[HomestayUnit]) {
    println!("{title}");
    for unit in view {
        let guest = if unit.is_vacant() { "-" } else { unit.current_guest_name.as_str() };
        println!(
            "  {:>3}  {:<22} {:>9}  {:<32} {:>2} rooms  {:<16} rented {}x",
            unit.id.0, unit.name, unit.price, unit.address, unit.room_count, guest, unit.rental_count
        );
    }
    println!();
}
