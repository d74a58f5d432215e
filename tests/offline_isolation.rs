//! Property 4: an offline process's MMIO traffic is silently dropped and
//! never observed by any other process's state, including its own once it
//! comes back online with a different group mapping.

use riscv_lite_executor::LiteExecutorDevice;

#[test]
fn offline_process_reads_return_zero() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.set_process_offline(2);
    assert_eq!(dev.mmio_read64(0x2000), 0);
}

#[test]
fn offline_writes_do_not_leak_into_other_processes() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.set_process_offline(2);
    dev.mmio_write64(0x2008, 0x1234);

    // Process 0 and 1 (still online, distinct groups) see nothing.
    assert_eq!(dev.mmio_read64(0x0000), 0);
    assert_eq!(dev.mmio_read64(0x1000), 0);
}

#[test]
fn bringing_a_process_back_online_does_not_resurrect_dropped_writes() {
    let mut dev = LiteExecutorDevice::create(0, 4).unwrap();
    dev.set_process_offline(2);
    dev.mmio_write64(0x2008, 0x1234);

    dev.set_process_online(2, 1);
    assert_eq!(dev.mmio_read64(0x2000), 0);
}
