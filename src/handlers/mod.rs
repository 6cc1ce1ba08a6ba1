pub mod contracts;
pub mod dashboard;
pub mod dormitories;
pub mod overview;
pub mod payments;
pub mod reports;
pub mod rooms;
pub mod tenants;
pub mod utilities;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Dormitory routes ──
    cfg.service(
        web::scope("/dormitories")
            .route("", web::get().to(dormitories::get_dormitories))
            .route("", web::post().to(dormitories::create_dormitory))
            .route("/{id}", web::get().to(dormitories::get_dormitory))
            .route("/{id}", web::put().to(dormitories::update_dormitory))
            .route("/{id}", web::delete().to(dormitories::delete_dormitory)),
    );

    // ── Room routes (the /options picker must precede /{id}) ──
    cfg.service(
        web::scope("/rooms")
            .route("", web::get().to(rooms::get_rooms))
            .route("", web::post().to(rooms::create_room))
            .route("/options", web::get().to(rooms::get_room_options))
            .route("/{id}", web::get().to(rooms::get_room))
            .route("/{id}", web::put().to(rooms::update_room))
            .route("/{id}", web::delete().to(rooms::delete_room)),
    );

    // ── Tenant routes ──
    cfg.service(
        web::scope("/tenants")
            .route("", web::get().to(tenants::get_tenants))
            .route("", web::post().to(tenants::create_tenant))
            .route("/{id}", web::get().to(tenants::get_tenant))
            .route("/{id}", web::put().to(tenants::update_tenant))
            .route("/{id}", web::delete().to(tenants::delete_tenant)),
    );

    // ── Contract routes ──
    cfg.service(
        web::scope("/contracts")
            .route("", web::get().to(contracts::get_contracts))
            .route("", web::post().to(contracts::create_contract))
            .route("/options", web::get().to(contracts::get_contract_options))
            .route("/{id}", web::get().to(contracts::get_contract))
            .route("/{id}", web::put().to(contracts::update_contract))
            .route("/{id}", web::delete().to(contracts::delete_contract)),
    );

    // ── Payment routes ──
    cfg.service(
        web::scope("/payments")
            .route("", web::get().to(payments::get_payments))
            .route("", web::post().to(payments::create_payment))
            .route("/{id}", web::get().to(payments::get_payment))
            .route("/{id}", web::put().to(payments::update_payment))
            .route("/{id}", web::delete().to(payments::delete_payment)),
    );

    // ── Utility routes ──
    cfg.service(
        web::scope("/utilities")
            .route("", web::get().to(utilities::get_utilities))
            .route("", web::post().to(utilities::create_utility))
            .route("/{id}", web::get().to(utilities::get_utility))
            .route("/{id}", web::put().to(utilities::update_utility))
            .route("/{id}", web::delete().to(utilities::delete_utility)),
    );

    // ── Derived views ──
    cfg.service(
        web::scope("/dashboard")
            .route("/summary", web::get().to(dashboard::summary))
            .route("/occupancy", web::get().to(dashboard::occupancy))
            .route("/recent-payments", web::get().to(dashboard::recent_payments)),
    );
    cfg.service(
        web::scope("/reports")
            .route("/income", web::get().to(reports::income))
            .route("/occupancy", web::get().to(reports::occupancy))
            .route("/payment-status", web::get().to(reports::payment_status)),
    );
    cfg.route("/overview", web::get().to(overview::get_overview));
}
