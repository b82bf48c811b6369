pub mod basic_ticket_service;
