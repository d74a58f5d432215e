//! Decode boundary conditions exercised through the device's public
//! `mmio_read64`/`mmio_write64` entry points, complementing the pure-decoder
//! unit tests in `src/decode.rs`.

use riscv_lite_executor::LiteExecutorDevice;

#[test]
fn ipc_registers_are_accepted_but_always_read_back_zero() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.mmio_write64(0x0800, 0xFEED); // IPC send register, process 0
    assert_eq!(dev.mmio_read64(0x0800), 0);

    dev.mmio_write64(0x0810, 0x1357); // IPC bound-queue element 1
    assert_eq!(dev.mmio_read64(0x0810), 0);
}

#[test]
fn reading_an_enqueue_register_is_a_no_op() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.mmio_write64(0x0008, 0x42);
    // Reading the enqueue (not dequeue) register does not consume the entry.
    assert_eq!(dev.mmio_read64(0x0008), 0);
    assert_eq!(dev.mmio_read64(0x0000), 0x42);
}

#[test]
fn writing_the_dequeue_register_is_dropped() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.mmio_write64(0x0000, 0x42); // write to dequeue register: no effect
    assert_eq!(dev.mmio_read64(0x0000), 0);
}

#[test]
#[should_panic(expected = "process index 16 out of range")]
fn out_of_range_process_read_is_fatal() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.mmio_read64(16 * 0x1000);
}

#[test]
#[should_panic(expected = "priority band 8 out of range")]
fn out_of_range_band_write_is_fatal() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.mmio_write64(0x008 + 8 * 0x8, 0x1);
}
