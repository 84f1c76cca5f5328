//! Debug Log Demo Firmware
//!
//! Runs on an STM32G474 Nucleo board. Two instrumented tasks record trace
//! events into the debug log; halt the core with a probe and dump the
//! `RADIO_DEBUG_LOG` symbol to inspect them.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use radio_debug_log::prelude::*;

/// Global event ids shared by every module of the demo
mod global_events {
    /// A task started running
    pub const TASK_STARTED: u8 = 1;
}

mod heartbeat {
    use super::*;

    trace_module!(1, Verbosity::High);

    /// Local event: LED toggled, parameter is the new level
    const LED_TOGGLED: u8 = 0;

    /// Blinks the status LED so it is visible that the system runs
    #[embassy_executor::task]
    pub async fn run(mut led: Output<'static>) {
        trace_global_event!(Verbosity::Low, global_events::TASK_STARTED, 1u16);
        loop {
            led.set_high();
            trace_local_event!(Verbosity::High, LED_TOGGLED, 1u16);
            Timer::after(Duration::from_millis(100)).await;
            led.set_low();
            trace_local_event!(Verbosity::High, LED_TOGGLED, 0u16);
            Timer::after(Duration::from_millis(900)).await;
        }
    }
}

mod button {
    use super::*;

    trace_module!(2);

    /// Local event: button edge seen, parameter is the press count
    const PRESSED: u8 = 0;

    fn on_press(count: u32) {
        trace_function_enter!(Verbosity::Low);
        trace_local_event!(Verbosity::Low, PRESSED, count);
        trace_function_exit!(Verbosity::Low);
    }

    /// Counts presses of the user button (EXTI line)
    #[embassy_executor::task]
    pub async fn run(mut input: ExtiInput<'static>) {
        trace_global_event!(Verbosity::Low, global_events::TASK_STARTED, 2u16);
        let mut count = 0u32;
        loop {
            input.wait_for_rising_edge().await;
            count = count.wrapping_add(1);
            on_press(count);
            info!("button pressed {} times", count);
        }
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Debug log demo v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    #[cfg(feature = "debug-log")]
    radio_debug_log::debug_log::announce();

    // Status LED on PA5, user button on PC13 for Nucleo boards
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    let input = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);

    spawner.spawn(heartbeat::run(led)).unwrap();
    spawner.spawn(button::run(input)).unwrap();

    info!("Tasks spawned, entering main loop");

    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}
