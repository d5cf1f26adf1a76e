// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use core::time::Duration;

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use log::{error, info, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use launcher::aim::AimInput;
use launcher::hw::clock::DwtClock;
use launcher::hw::encoder::Tim2Counter;
use launcher::hw::pins::BoardPins;
use launcher::hw::pwm::Tim4Pwm;
use launcher::hw::usart::{Usart, UsartLogger};
use launcher::hw::{
    Clock, OutputBank, PulseConfig, RateEncoder, Relay, SpeedController, Switch, SwitchBank,
};
use launcher::modes::{ButtonMap, Mode, OperatorInput, Supervisor};
use launcher::protocol::{Command, Parser};
use launcher::schedule::TickScheduler;
use launcher::{Error, Launcher, LauncherConfig};

/// Flywheel rate units per hall pulse (one magnet, rate in rev/s).
const RATE_PER_PULSE: f32 = 1.0;

fn halt(e: Error) -> ! {
    error!("startup failed: {}", e);
    loop {
        cortex_m::asm::wfi();
    }
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(216.MHz()).freeze();
    let sysclk_hz = clocks.sysclk().raw();

    cp.DCB.enable_trace();
    cp.DWT.enable_cycle_counter();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

    // USART1: log out, driver station in
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let (usart, mut rx) = Usart::split(serial);
    UsartLogger::install(usart, LevelFilter::Info);
    info!("launcher boot, sysclk {} Hz", sysclk_hz);

    let cfg = LauncherConfig::DEFAULT;

    // Flywheel
    let rate = RateEncoder::new(
        Tim2Counter::new(dp.TIM2),
        DwtClock::new(sysclk_hz),
        RATE_PER_PULSE,
    );
    let pulse = PulseConfig::JAGUAR;
    let pwm = Tim4Pwm::ch1(dp.TIM4, clocks.timclk1().raw(), pulse.period_us as u16);
    let flywheel = SpeedController::new(pwm, pulse).unwrap_or_else(|e| halt(e));

    // Relays
    let hurricane = Relay::active_high(pins.hurricane.fwd, pins.hurricane.rev)
        .unwrap_or_else(|e| halt(e));
    let tilt = Relay::active_high(pins.tilt.fwd, pins.tilt.rev).unwrap_or_else(|e| halt(e));

    // Switches, limits wired normally closed to ground
    let switches = SwitchBank {
        passage: Switch::active_high(pins.switches.passage),
        up_limit: Switch::active_low(pins.switches.up_limit),
        down_limit: Switch::active_low(pins.switches.down_limit),
        mechanism_enable: Switch::active_high(pins.switches.mechanism_enable),
    };
    let outputs = OutputBank {
        flywheel,
        hurricane,
        tilt,
    };

    let launcher = Launcher::new(&cfg, rate, switches, outputs);
    let mut supervisor = Supervisor::new(&cfg, ButtonMap::DEFAULT, launcher);

    let mut clock = DwtClock::new(sysclk_hz);
    let mut delay = Delay::new(cp.SYST, sysclk_hz);
    let mut scheduler = TickScheduler::new(supervisor.period());
    let mut parser = Parser::new();

    let mut operator = OperatorInput::default();
    let mut aim = AimInput::NOT_VISIBLE;

    loop {
        while let Ok(byte) = rx.read() {
            match parser.push(byte) {
                Some(Command::SetMode(mode)) => {
                    if let Err(e) = supervisor.set_mode(mode) {
                        error!("mode change failed: {}", e);
                    }
                    operator = OperatorInput::default();
                    aim = AimInput::NOT_VISIBLE;
                }
                Some(Command::Operator(op)) => operator = op,
                Some(Command::Aim(sample)) => aim = sample,
                None => {}
            }
        }

        scheduler.set_period(supervisor.period());
        let now = clock.now();
        scheduler.begin(now);

        if let Err(e) = supervisor.tick(now, &operator, aim) {
            error!("tick failed in {:?}: {}", supervisor.mode(), e);
            if let Err(e) = supervisor.set_mode(Mode::Disabled) {
                error!("abort failed: {}", e);
            }
        }

        let wait = scheduler.end(clock.now());
        if wait > Duration::ZERO {
            delay.delay_us(wait.as_micros() as u32);
        }
    }
}
