// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Flywheel PWM on TIM4 channel 1 (PD12).
//!
//! The timer ticks at 1 MHz so one duty count is one microsecond of pulse width, and the
//! auto-reload value is the period in microseconds.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::pac;

pub struct Tim4Pwm {
    tim: pac::TIM4,
    period_us: u16,
}

impl Tim4Pwm {
    /// Configure TIM4 CH1 as PWM mode 1.
    ///
    /// `timer_clk_hz` is the TIM4 kernel clock and must be a multiple of 1 MHz. `period_us` must be
    /// nonzero.
    pub fn ch1(tim4: pac::TIM4, timer_clk_hz: u32, period_us: u16) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        debug_assert!(timer_clk_hz >= 1_000_000);
        debug_assert!(period_us > 0);

        let psc = (timer_clk_hz / 1_000_000).saturating_sub(1);
        let arr = u32::from(period_us).saturating_sub(1);
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(arr) });
        tim.ccr1.write(|w| unsafe { w.bits(0) });

        // OC1M = PWM mode 1 (0b110), OC1PE = preload enable
        tim.ccmr1_output()
            .modify(|r, w| unsafe { w.bits((r.bits() & !0x78) | (0b110 << 4) | (1 << 3)) });

        // CC1E
        tim.ccer.modify(|r, w| unsafe { w.bits(r.bits() | 1) });

        // ARPE, then latch the preloads with an update event
        tim.cr1.modify(|r, w| unsafe { w.bits(r.bits() | (1 << 7)) });
        tim.egr.write(|w| unsafe { w.bits(1) });
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim, period_us }
    }

    pub fn free(self) -> pac::TIM4 {
        self.tim
    }
}

impl ErrorType for Tim4Pwm {
    type Error = Infallible;
}

impl SetDutyCycle for Tim4Pwm {
    fn max_duty_cycle(&self) -> u16 {
        self.period_us
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        let duty = duty.min(self.period_us);
        self.tim.ccr1.write(|w| unsafe { w.bits(duty as u32) });
        Ok(())
    }
}
