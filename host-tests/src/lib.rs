//! Host-based end-to-end tests for the field node controller.
//! These run the real controller, gesture detector, packet framing and
//! SX127x driver against in-memory hardware on the development machine.
