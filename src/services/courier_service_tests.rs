// src/services/courier_service_tests.rs
//
// UNIT TESTS: Courier Service Orchestration
//
// PURPOSE:
// - Prove booking validates before storing: no invalid record is ever kept
// - Prove the capacity bound holds through the service
// - Prove status updates mutate exactly one record and nothing else
// - Prove emitted events carry the stored facts

#[cfg(test)]
mod booking_tests {
    use crate::domain::{CourierStatus, DomainError};
    use crate::error::AppError;
    use crate::events::{CourierBooked, EventBus};
    use crate::services::{BookCourierRequest, CourierService};
    use crate::store::{CourierStore, StoreError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn request(id: u32, weight_kg: f64, mode: &str) -> BookCourierRequest {
        BookCourierRequest {
            courier_id: id,
            sender: "Asha".to_string(),
            receiver: "Bruno".to_string(),
            weight_kg,
            mode: mode.to_string(),
        }
    }

    fn service_with_capacity(capacity: usize) -> CourierService {
        CourierService::new(
            CourierStore::with_capacity(capacity),
            Arc::new(EventBus::new()),
        )
    }

    #[test]
    fn test_booking_stores_a_booked_record() {
        let service = service_with_capacity(5);

        let courier = service.book_courier(request(1, 10.0, "car")).unwrap();
        assert_eq!(courier.status, CourierStatus::Booked);
        assert_eq!(courier.charges, 150.0);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_invalid_mode_stores_nothing() {
        let service = service_with_capacity(5);

        let err = service.book_courier(request(1, 10.0, "PLANE")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidTransportMode(_))
        ));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_invalid_weight_stores_nothing() {
        let service = service_with_capacity(5);

        let err = service.book_courier(request(1, 120.0, "CAR")).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidWeight { .. })));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_blank_sender_stores_nothing() {
        let service = service_with_capacity(5);
        let mut bad = request(1, 10.0, "CAR");
        bad.sender = "  ".to_string();

        let err = service.book_courier(bad).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvariantViolation(_))
        ));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_capacity_bound_holds_through_service() {
        let service = service_with_capacity(2);

        service.book_courier(request(1, 1.0, "TRAIN")).unwrap();
        service.book_courier(request(2, 2.0, "SHIP")).unwrap();
        assert!(service.is_full());

        let err = service.book_courier(request(3, 3.0, "CAR")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Store(StoreError::CapacityExceeded { capacity: 2 })
        ));
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_booking_emits_the_stored_facts() {
        let bus = Arc::new(EventBus::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        bus.subscribe::<CourierBooked, _>(move |event| {
            assert_eq!(event.courier_id, 9);
            assert_eq!(event.charges, 75.0);
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let service = CourierService::new(CourierStore::new(), bus);
        service.book_courier(request(9, 2.5, "FLIGHT")).unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejected_booking_emits_nothing() {
        let bus = Arc::new(EventBus::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        bus.subscribe::<CourierBooked, _>(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let service = CourierService::new(CourierStore::new(), bus);
        let _ = service.book_courier(request(1, -1.0, "CAR"));

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}

#[cfg(test)]
mod status_tests {
    use crate::domain::{CourierStatus, DomainError};
    use crate::error::AppError;
    use crate::events::{CourierStatusUpdated, EventBus};
    use crate::services::{BookCourierRequest, CourierService};
    use crate::store::CourierStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn booked_service() -> CourierService {
        let service = CourierService::new(CourierStore::new(), Arc::new(EventBus::new()));
        service
            .book_courier(BookCourierRequest {
                courier_id: 1,
                sender: "Asha".to_string(),
                receiver: "Bruno".to_string(),
                weight_kg: 10.0,
                mode: "TRAIN".to_string(),
            })
            .unwrap();
        service
    }

    #[test]
    fn test_update_status_transitions_the_record() {
        let service = booked_service();

        let status = service.update_status(1, "in_transit").unwrap();
        assert_eq!(status, CourierStatus::InTransit);

        let couriers = service.list_couriers();
        assert_eq!(couriers[0].status, CourierStatus::InTransit);
    }

    #[test]
    fn test_update_status_preserves_charges() {
        let service = booked_service();
        let before = service.list_couriers()[0].charges;

        service.update_status(1, "DELIVERED").unwrap();

        let after = service.list_couriers()[0].charges;
        assert_eq!(before, after);
    }

    #[test]
    fn test_invalid_status_leaves_record_unchanged() {
        let service = booked_service();

        let err = service.update_status(1, "bogus").unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidStatus(_))));
        assert_eq!(service.list_couriers()[0].status, CourierStatus::Booked);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let service = booked_service();

        let err = service.update_status(42, "DELIVERED").unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_update_emits_both_endpoints() {
        let bus = Arc::new(EventBus::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        bus.subscribe::<CourierStatusUpdated, _>(move |event| {
            assert_eq!(event.from, CourierStatus::Booked);
            assert_eq!(event.to, CourierStatus::Delivered);
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let service = CourierService::new(CourierStore::new(), bus);
        service
            .book_courier(BookCourierRequest {
                courier_id: 3,
                sender: "A".to_string(),
                receiver: "B".to_string(),
                weight_kg: 1.0,
                mode: "SHIP".to_string(),
            })
            .unwrap();
        service.update_status(3, "delivered").unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicate_ids_update_first_match() {
        let service = booked_service();
        service
            .book_courier(BookCourierRequest {
                courier_id: 1,
                sender: "Carol".to_string(),
                receiver: "Dan".to_string(),
                weight_kg: 5.0,
                mode: "CAR".to_string(),
            })
            .unwrap();

        service.update_status(1, "IN_TRANSIT").unwrap();

        let couriers = service.list_couriers();
        assert_eq!(couriers[0].status, CourierStatus::InTransit);
        assert_eq!(couriers[1].status, CourierStatus::Booked);
    }
}
