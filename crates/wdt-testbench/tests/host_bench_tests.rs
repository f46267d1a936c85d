//! Host-bench scenarios driven through the register-level test bench.
//!
//! Each test resets the device, programs it through sized register writes and
//! samples the interrupt line after free-running clock cycles at 10 MHz.

#![cfg(test)]

use std::time::Duration;

use wdt_testbench::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const TAP_INVALID: u32 = 0xFFFF;

fn bench() -> TestBench {
    init_tracing();
    let mut tb = TestBench::watchdog();
    tb.reset();
    tb
}

fn started(countdown: u32) -> Result<TestBench, WdtError> {
    let mut tb = bench();
    tb.write_word_reg(addr::COUNTDOWN, countdown)?;
    tb.write_word_reg(addr::START, 1)?;
    Ok(tb)
}

#[test]
fn test_interrupt_on_timeout() -> TestResult {
    let countdown = 10;
    let mut tb = started(countdown)?;

    tb.clock_cycles(u64::from(countdown) + 3);

    assert!(tb.is_interrupt_asserted(), "interrupt not asserted on timeout");
    Ok(())
}

#[test]
fn test_tap_clears_timeout_and_reloads() -> TestResult {
    let countdown = 100;
    let mut tb = started(countdown)?;

    tb.clock_cycles(u64::from(countdown));
    assert!(tb.is_interrupt_asserted(), "interrupt not asserted on timeout");

    tb.write_word_reg(addr::TAP, TAP_CODE)?;
    tb.clock_cycles(u64::from(countdown / 4));

    assert!(!tb.is_interrupt_asserted(), "interrupt asserted after tap");
    Ok(())
}

#[test]
fn test_enable_zero_does_not_clear_timeout() -> TestResult {
    let mut tb = started(10)?;
    tb.clock_cycles(10);
    assert!(tb.is_interrupt_asserted());

    tb.write_word_reg(addr::ENABLE, 0)?;

    assert!(tb.is_interrupt_asserted(), "interrupt cleared by ENABLE=0");
    Ok(())
}

#[test]
fn test_multiple_valid_taps_prevent_interrupt() -> TestResult {
    let countdown = 100;
    let mut tb = started(countdown)?;

    tb.write_word_reg(addr::TAP, TAP_CODE)?;
    tb.clock_cycles(u64::from(countdown / 2));
    tb.write_word_reg(addr::TAP, TAP_CODE)?;
    tb.clock_cycles(u64::from(countdown / 2));
    tb.write_word_reg(addr::TAP, TAP_CODE)?;
    tb.clock_cycles(u64::from(countdown / 2));

    assert!(!tb.is_interrupt_asserted(), "interrupt asserted despite taps");
    assert_eq!(tb.bus().core().metrics().tap_count, 3);
    Ok(())
}

#[test]
fn test_wrong_tap_value_ignored() -> TestResult {
    let countdown = 100;
    let mut tb = started(countdown)?;
    tb.clock_cycles(u64::from(countdown));
    assert!(tb.is_interrupt_asserted());

    tb.write_word_reg(addr::TAP, TAP_INVALID)?;
    tb.clock_cycles(u64::from(countdown / 4));

    assert!(tb.is_interrupt_asserted(), "interrupt cleared by invalid tap");
    Ok(())
}

#[test]
fn test_byte_tap_never_matches() -> TestResult {
    let mut tb = started(4)?;
    tb.clock_cycles(4);

    tb.write_byte_reg(addr::TAP, 0xCD)?;
    assert!(tb.is_interrupt_asserted());

    tb.write_hword_reg(addr::TAP, 0xABCD)?;
    assert!(!tb.is_interrupt_asserted());
    Ok(())
}

#[test]
fn test_start_does_not_clear_interrupt() -> TestResult {
    let countdown = 50;
    let mut tb = started(countdown)?;
    tb.clock_cycles(u64::from(countdown));
    assert!(tb.is_interrupt_asserted());

    tb.write_word_reg(addr::START, 1)?;

    assert!(tb.is_interrupt_asserted(), "START cleared the interrupt");
    assert_eq!(tb.read_word_reg(addr::STATUS)?, 0b1111);
    Ok(())
}

#[test]
fn test_repeated_start_reloads_countdown() -> TestResult {
    let countdown = 100;
    let mut tb = started(countdown)?;

    tb.clock_cycles(u64::from(countdown / 2));
    tb.write_word_reg(addr::START, 1)?;
    tb.clock_cycles(u64::from(countdown / 2));

    assert!(!tb.is_interrupt_asserted(), "START did not reload the countdown");
    assert_eq!(tb.bus().core().state().countdown_remaining(), 50);
    Ok(())
}

#[test]
fn test_disable_after_timeout_keeps_interrupt() -> TestResult {
    let mut tb = started(8)?;
    tb.clock_cycles(8);

    tb.write_byte_reg(addr::ENABLE, 0)?;
    tb.clock_cycles(20);

    assert!(tb.is_interrupt_asserted());
    assert_eq!(tb.read_byte_reg(addr::STATUS)?, 0b0100);
    Ok(())
}

#[test]
fn test_countdown_readback_all_widths() -> TestResult {
    let mut tb = bench();

    tb.write_word_reg(addr::COUNTDOWN, 0x8234_5678)?;
    assert_eq!(tb.read_byte_reg(addr::COUNTDOWN)?, 0x78);
    assert_eq!(tb.read_hword_reg(addr::COUNTDOWN)?, 0x5678);
    assert_eq!(tb.read_word_reg(addr::COUNTDOWN)?, 0x8234_5678);
    Ok(())
}

#[test]
fn test_byte_write_replaces_low_lane_only() -> TestResult {
    let mut tb = bench();
    tb.write_word_reg(addr::COUNTDOWN, 0x8234_5678)?;

    tb.write_byte_reg(addr::COUNTDOWN, 0x42)?;

    assert_eq!(tb.read_word_reg(addr::COUNTDOWN)?, 0x8234_5642);
    Ok(())
}

#[test]
fn test_hword_write_replaces_low_lanes_only() -> TestResult {
    let mut tb = bench();
    tb.write_word_reg(addr::COUNTDOWN, 0x8234_5678)?;

    tb.write_hword_reg(addr::COUNTDOWN, 0xBEEF)?;

    assert_eq!(tb.read_word_reg(addr::COUNTDOWN)?, 0x8234_BEEF);
    Ok(())
}

#[test]
fn test_start_without_countdown_does_not_start() -> TestResult {
    let mut tb = bench();

    tb.write_word_reg(addr::START, 1)?;
    tb.clock_cycles(100);

    assert_eq!(tb.read_word_reg(addr::STATUS)?, 0);
    assert!(!tb.is_interrupt_asserted());
    Ok(())
}

#[test]
fn test_tap_after_timeout_restarts_full_period() -> TestResult {
    let countdown = 20;
    let mut tb = started(countdown)?;
    tb.clock_cycles(u64::from(countdown));
    assert!(tb.is_interrupt_asserted());

    tb.write_word_reg(addr::TAP, TAP_CODE)?;
    assert!(!tb.is_interrupt_asserted());

    tb.clock_cycles(u64::from(countdown - 1));
    assert!(!tb.is_interrupt_asserted());
    tb.clock_cycles(1);
    assert!(tb.is_interrupt_asserted(), "reloaded countdown did not expire");
    Ok(())
}

#[test]
fn test_disable_before_start_has_no_effect() -> TestResult {
    let mut tb = bench();
    tb.write_word_reg(addr::COUNTDOWN, 10)?;
    tb.write_word_reg(addr::ENABLE, 0)?;

    tb.clock_cycles(50);

    assert!(!tb.is_interrupt_asserted());
    assert_eq!(tb.read_word_reg(addr::STATUS)?, 0);
    Ok(())
}

#[test]
fn test_status_after_start() -> TestResult {
    let mut tb = started(30)?;
    tb.clock_cycles(10);

    let status = StatusFlags::decode(tb.read_word_reg(addr::STATUS)?);
    assert_eq!(
        status,
        StatusFlags::ENABLED | StatusFlags::STARTED | StatusFlags::COUNTER_ACTIVE
    );
    Ok(())
}

#[test]
fn test_status_after_timeout() -> TestResult {
    let mut tb = started(30)?;
    tb.clock_cycles(30);

    let status = StatusFlags::decode(tb.read_word_reg(addr::STATUS)?);
    assert!(status.contains(StatusFlags::TIMEOUT_PENDING));
    assert!(!status.contains(StatusFlags::COUNTER_ACTIVE));
    assert!(status.contains(StatusFlags::ENABLED | StatusFlags::STARTED));
    Ok(())
}

#[test]
fn test_reset_clears_everything() -> TestResult {
    let mut tb = started(5)?;
    tb.clock_cycles(5);
    assert!(tb.is_interrupt_asserted());

    tb.reset();

    assert!(!tb.is_interrupt_asserted());
    assert_eq!(tb.read_word_reg(addr::STATUS)?, 0);
    assert_eq!(tb.read_word_reg(addr::COUNTDOWN)?, 0);
    Ok(())
}

#[test]
fn test_write_only_registers_read_zero() -> TestResult {
    let mut tb = started(5)?;
    tb.write_word_reg(addr::TAP, TAP_CODE)?;

    assert_eq!(tb.read_word_reg(addr::START)?, 0);
    assert_eq!(tb.read_word_reg(addr::TAP)?, 0);
    Ok(())
}

#[test]
fn test_timeout_after_wall_clock_period() -> TestResult {
    let mut tb = bench();
    let countdown = tb.bus().config().countdown_for(Duration::from_micros(10))?;
    assert_eq!(countdown, 100);

    tb.write_word_reg(addr::COUNTDOWN, countdown)?;
    tb.write_word_reg(addr::START, 1)?;

    tb.clock_for(Duration::from_nanos(9_900));
    assert!(!tb.is_interrupt_asserted());
    tb.clock_for(Duration::from_nanos(100));
    assert!(tb.is_interrupt_asserted());
    assert_eq!(tb.cycles_elapsed(), 100);
    Ok(())
}

#[test]
fn test_unmapped_address_is_rejected() {
    let mut tb = bench();
    assert!(matches!(
        tb.write_word_reg(0x05, 1),
        Err(WdtError::UnmappedAddress { address: 0x05 })
    ));
    assert!(matches!(
        tb.read_byte_reg(0x40),
        Err(WdtError::UnmappedAddress { .. })
    ));
}
