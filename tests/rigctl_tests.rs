//! RigCtl emulation tests

mod common;

use ats_remote::protocol::rigctl::{frequency_hz, native_frequency, passband_hz, process};
use ats_remote::types::Mode;
use common::{run, MockChannel, MockRadio};

fn serve(radio: &mut MockRadio, requests: &[u8]) -> String {
    let mut channel = MockChannel::with_input(requests);
    run(process(&mut channel, radio));
    assert!(channel.input.is_empty(), "requests not fully consumed");
    channel.output_str()
}

// ============================================================================
// Frequency
// ============================================================================

#[test]
fn test_get_frequency_ssb() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"f\n"), "14200500\n");
}

#[test]
fn test_get_frequency_fm() {
    let mut radio = MockRadio::new();
    radio.mode = Mode::Fm;
    radio.frequency = 10390;
    radio.bfo = 0;
    assert_eq!(serve(&mut radio, b"f\n"), "103900000\n");
}

#[test]
fn test_set_then_get_frequency() {
    let mut radio = MockRadio::new();
    let output = serve(&mut radio, b"F14205000\nf\n");

    assert_eq!(radio.frequency, 14205);
    assert_eq!(output, "RPRT 0\r\n14205500\n");
}

#[test]
fn test_set_frequency_with_blank() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"F 7074000\n"), "RPRT 0\r\n");
    assert_eq!(radio.frequency, 7074);
}

#[test]
fn test_set_frequency_fm_units() {
    let mut radio = MockRadio::new();
    radio.mode = Mode::Fm;
    serve(&mut radio, b"F103900000\n");
    assert_eq!(radio.frequency, 10390);
}

#[test]
fn test_frequency_conversions() {
    assert_eq!(frequency_hz(Mode::Usb, 14200, 500), 14_200_500);
    assert_eq!(frequency_hz(Mode::Lsb, 7074, -1200), 7_072_800);
    assert_eq!(frequency_hz(Mode::Fm, 10800, 300), 108_000_000);

    assert_eq!(native_frequency(Mode::Am, 999_999), 999);
    assert_eq!(native_frequency(Mode::Fm, 87_500_000), 8750);
    assert_eq!(native_frequency(Mode::Usb, u32::MAX), u16::MAX);
}

// ============================================================================
// Mode
// ============================================================================

#[test]
fn test_get_mode() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"m\n"), "USB\n2700\n");

    radio.mode = Mode::Fm;
    assert_eq!(serve(&mut radio, b"m\n"), "FM\n100000\n");

    radio.mode = Mode::Am;
    assert_eq!(serve(&mut radio, b"m\n"), "AM\n6000\n");
    assert_eq!(passband_hz(Mode::Lsb), 2700);
}

#[test]
fn test_set_mode() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"M LSB 2400\n"), "RPRT 0\r\n");
    assert_eq!(radio.mode, Mode::Lsb);
    // Band and frequency stay
    assert_eq!(radio.frequency, 14200);
    assert_eq!(radio.band_index, common::BAND_20M);
}

#[test]
fn test_set_unknown_mode_is_acknowledged() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"M CW 500\n"), "RPRT 0\r\n");
    assert_eq!(radio.mode, Mode::Usb);
}

// ============================================================================
// VFO and levels
// ============================================================================

#[test]
fn test_get_vfo() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"v\n"), "VFOA\r\n");
}

#[test]
fn test_get_strength() {
    let mut radio = MockRadio::new();
    radio.rssi = 40;
    assert_eq!(serve(&mut radio, b"l STRENGTH\n"), "-87\n");
}

#[test]
fn test_get_other_level() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"l RFPOWER\n"), "0\r\n");
    assert_eq!(serve(&mut radio, b"l AVERYLONGLEVELNAMEINDEED\n"), "0\r\n");
}

// ============================================================================
// Framing
// ============================================================================

#[test]
fn test_no_echo() {
    let mut radio = MockRadio::new();
    let output = serve(&mut radio, b"F14074000\n");
    assert!(!output.contains("14074000"));
}

#[test]
fn test_quit_and_blank_lines() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"q\n\r\n  \n"), "");
}

#[test]
fn test_unknown_request_discards_line() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b"\\dump_state\nf\n"), "14200500\n");
    assert_eq!(serve(&mut radio, b"x garbage\n"), "");
}

#[test]
fn test_pipelined_requests() {
    let mut radio = MockRadio::new();
    let output = serve(&mut radio, b"v\nf\nm\nl STRENGTH\n");
    assert_eq!(output, "VFOA\r\n14200500\nUSB\n2700\n-87\n");
}

#[test]
fn test_empty_input_does_nothing() {
    let mut radio = MockRadio::new();
    assert_eq!(serve(&mut radio, b""), "");
}
