//! Standalone smoke-test runner for the Lite Executor device model.
//!
//! Builds a device and drives it through the canonical end-to-end scenarios
//! from spec.md §8 (S1–S6), printing a PASS/FAIL summary. This is the
//! host-side equivalent of the teacher's milestone-banner `main.rs`: there
//! is no guest CPU here, just direct MMIO offset pokes standing in for one.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use riscv_lite_executor::LiteExecutorDevice;

/// Run the Lite Executor's canned end-to-end scenarios against a freshly
/// created device.
#[derive(Parser, Debug)]
#[command(name = "riscv-lite-executor-demo", about)]
struct Args {
    /// Base address to report for the device (diagnostic only; this binary
    /// does not map any real memory).
    #[arg(long, default_value_t = 0)]
    base_addr: u64,

    /// Number of external interrupt source lines to wire up.
    #[arg(long, default_value_t = 4)]
    num_sources: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut device = match LiteExecutorDevice::create(args.base_addr, args.num_sources) {
        Ok(device) => device,
        Err(err) => {
            eprintln!("failed to create device: {err}");
            std::process::exit(1);
        }
    };

    let mut failures = 0;
    for (name, scenario) in scenarios() {
        print!("[{name}] ... ");
        match scenario(&mut device) {
            Ok(()) => println!("PASS"),
            Err(reason) => {
                println!("FAIL: {reason}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} scenario(s) failed");
        std::process::exit(1);
    }
    println!("all scenarios passed");
}

type Scenario = fn(&mut LiteExecutorDevice) -> Result<(), String>;

fn scenarios() -> Vec<(&'static str, Scenario)> {
    vec![
        ("S1 enqueue/dequeue single band", s1_single_band),
        ("S2 priority ordering", s2_priority_ordering),
        ("S3 per-process isolation", s3_per_process_isolation),
        ("S4 offline slot", s4_offline_slot),
        ("S5 EIH -> PS dispatch", s5_eih_to_ps_dispatch),
        ("S6 multi-push ordering", s6_multi_push_ordering),
    ]
}

fn expect(name: &str, actual: u64, expected: u64) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{name}: expected {expected:#x}, got {actual:#x}"))
    }
}

fn s1_single_band(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.mmio_write64(0x0008, 0xDEAD);
    expect("first read", dev.mmio_read64(0x0000), 0xDEAD)?;
    expect("second read", dev.mmio_read64(0x0000), 0)
}

fn s2_priority_ordering(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.mmio_write64(0x0010, 0x11);
    dev.mmio_write64(0x0008, 0x22);
    expect("band 0 first", dev.mmio_read64(0x0000), 0x22)?;
    expect("band 1 second", dev.mmio_read64(0x0000), 0x11)
}

fn s3_per_process_isolation(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.mmio_write64(0x1008, 0xAA);
    expect("process 0 unaffected", dev.mmio_read64(0x0000), 0)?;
    expect("process 1 sees its own write", dev.mmio_read64(0x1000), 0xAA)
}

fn s4_offline_slot(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.set_process_offline(5);
    dev.mmio_write64(0x5008, 0xFF);
    expect("offline write dropped", dev.mmio_read64(0x5000), 0)
}

fn s5_eih_to_ps_dispatch(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.mmio_write64(0x0918, 0xC0DE);
    dev.fire_irq(3, true);
    expect("dispatched handler cookie", dev.mmio_read64(0x0000), 0xC0DE)
}

fn s6_multi_push_ordering(dev: &mut LiteExecutorDevice) -> Result<(), String> {
    dev.mmio_write64(0x0018, 0x1);
    dev.mmio_write64(0x0018, 0x2);
    dev.mmio_write64(0x0018, 0x3);
    expect("first", dev.mmio_read64(0x0000), 0x1)?;
    expect("second", dev.mmio_read64(0x0000), 0x2)?;
    expect("third", dev.mmio_read64(0x0000), 0x3)
}
