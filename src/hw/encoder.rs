// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Flywheel pulse counting on TIM2.
//!
//! TIM2 runs in external clock mode 1 with TI1 (PA0) as the clock, so every hall pulse from the
//! flywheel magnet advances the 32-bit counter by one.

use stm32f7xx_hal::pac;

use crate::error::Error;
use crate::hw::rate::PulseCounter;

pub struct Tim2Counter {
    tim: pac::TIM2,
}

impl Tim2Counter {
    /// Configure TIM2 to count rising edges on TI1 over its full 32-bit range.
    pub fn new(tim2: pac::TIM2) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // CH1 as input from TI1, rising edge
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1());
        tim.ccer.modify(|_, w| w.cc1p().clear_bit().cc1np().clear_bit());

        // Slave mode: external clock mode 1 (SMS = 0b111), trigger TI1FP1 (TS = 0b101)
        tim.smcr
            .modify(|r, w| unsafe { w.bits((r.bits() & !0x77) | (0b101 << 4) | 0b111) });

        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Read the raw 32-bit counter value.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.tim.cnt.read().cnt().bits()
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIM2 {
        self.tim
    }
}

impl PulseCounter for Tim2Counter {
    fn count(&mut self) -> Result<u32, Error> {
        Ok(self.raw())
    }
}
