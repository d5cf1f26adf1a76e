// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 launcher board.
//!
//! The HAL's GPIO types expose plain `is_high` / `set_high` methods; [`BoardInput`] and
//! [`BoardOutput`] put the `embedded-hal` 1.0 traits on top so the generic wrappers in [`crate::hw`]
//! can use them.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use stm32f7xx_hal::{
    gpio::{self, gpioa, gpiod, gpioe, Alternate, Floating, Input, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub flywheel: FlywheelPins,
    pub hurricane: RelayPins<'E', 4, 'E', 11>,
    pub tilt: RelayPins<'D', 14, 'D', 15>,
    pub switches: SwitchPins,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

pub struct FlywheelPins {
    pub hall: gpioa::PA0<Alternate<1>>, // TIM2_CH1 (pulse count)
    pub pwm: gpiod::PD12<Alternate<2>>, // TIM4_CH1 (speed controller)
}

pub struct RelayPins<const FP: char, const FN: u8, const RP: char, const RN: u8> {
    pub fwd: BoardOutput<FP, FN>,
    pub rev: BoardOutput<RP, RN>,
}

pub struct SwitchPins {
    pub passage: BoardInput<'A', 2>,
    pub up_limit: BoardInput<'A', 3>,
    pub down_limit: BoardInput<'A', 4>,
    pub mechanism_enable: BoardInput<'D', 0>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            flywheel: FlywheelPins {
                hall: gpioa.pa0.into_alternate::<1>(),
                pwm: gpiod.pd12.into_alternate::<2>(),
            },

            hurricane: RelayPins {
                fwd: BoardOutput(gpioe.pe4.into_push_pull_output()),
                rev: BoardOutput(gpioe.pe11.into_push_pull_output()),
            },

            tilt: RelayPins {
                fwd: BoardOutput(gpiod.pd14.into_push_pull_output()),
                rev: BoardOutput(gpiod.pd15.into_push_pull_output()),
            },

            switches: SwitchPins {
                passage: BoardInput(gpioa.pa2.into_floating_input()),
                up_limit: BoardInput(gpioa.pa3.into_floating_input()),
                down_limit: BoardInput(gpioa.pa4.into_floating_input()),
                mechanism_enable: BoardInput(gpiod.pd0.into_floating_input()),
            },
        }
    }
}

pub struct BoardInput<const P: char, const N: u8>(pub gpio::Pin<P, N, Input<Floating>>);

impl<const P: char, const N: u8> ErrorType for BoardInput<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> InputPin for BoardInput<P, N> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_low())
    }
}

pub struct BoardOutput<const P: char, const N: u8>(pub gpio::Pin<P, N, Output<PushPull>>);

impl<const P: char, const N: u8> ErrorType for BoardOutput<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for BoardOutput<P, N> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }
}
