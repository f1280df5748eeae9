#![no_main]
#![no_std]

use panic_abort as _;
use rtic::app;

use stm32f1xx_hal::flash::FlashExt;
use stm32f1xx_hal::gpio::{GpioExt, Output, PushPull, PB12, PB13, PB14, PB15};

use systick_monotonic::Systick;

use tlc5947_bitbang::*;

//-----------------------------------------------------------------------------

type Device = Tlc5947<
    PB12<Output<PushPull>>, // latch
    PB15<Output<PushPull>>, // data
    PB14<Output<PushPull>>, // oe
    PB13<Output<PushPull>>, // clock
>;

//-----------------------------------------------------------------------------

#[app(device = stm32f1xx_hal::pac, peripherals = true, dispatchers = [RTCALARM])]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        device: Device,
        level: PwmValue,
        step: Step,
        needs_begin: bool,
    }

    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<{ config::SYSTICK_RATE_HZ }>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        use stm32f1xx_hal::prelude::_fugit_RateExtU32;
        use stm32f1xx_hal::prelude::_stm32_hal_rcc_RccExt;

        let mut flash = ctx.device.FLASH.constrain();

        let mut gpiob = ctx.device.GPIOB.split();

        let rcc = ctx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(config::MCU_XTAL_HZ.Hz())
            .sysclk(config::SYSCLK_HZ.Hz())
            .freeze(&mut flash.acr);

        let mono = Systick::new(ctx.core.SYST, clocks.sysclk().to_Hz());

        //---------------------------------------------------------------------

        let latch = gpiob.pb12.into_push_pull_output(&mut gpiob.crh);
        let clock = gpiob.pb13.into_push_pull_output(&mut gpiob.crh);
        let oe = gpiob.pb14.into_push_pull_output(&mut gpiob.crh);
        let data = gpiob.pb15.into_push_pull_output(&mut gpiob.crh);

        let mut device = Tlc5947::new(latch, data, oe, clock);
        device.begin().unwrap();
        device.flush().unwrap();

        fade::spawn().unwrap();

        //---------------------------------------------------------------------

        (
            Shared {},
            Local {
                device,
                level: PwmValue::default(),
                step: Step::new(config::FADE_STEP),
                needs_begin: false,
            },
            init::Monotonics(mono),
        )
    }

    //-------------------------------------------------------------------------

    #[idle()]
    fn idle(_ctx: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    //-------------------------------------------------------------------------

    #[task(local = [device, level, step, needs_begin])]
    fn fade(ctx: fade::Context) {
        use systick_monotonic::*;

        let device = ctx.local.device;
        let level = ctx.local.level;
        let step = ctx.local.step;
        let needs_begin = ctx.local.needs_begin;

        // a half-shifted frame leaves the outputs undefined, reset first
        if *needs_begin {
            match device.begin() {
                Ok(()) => *needs_begin = false,
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("tlc5947 reset failed: {}", _e);
                    fade::spawn_after(config::FADE_PERIOD_MS.millis()).unwrap();
                    return;
                }
            }
        }

        *level = *level + *step;
        if *level == PwmValue::MAX || *level == PwmValue::MIN {
            *step = step.reverse();
        }

        // neighbouring channels run half a cycle apart
        for channel in Channel::all() {
            let value = if channel.id() % 2 == 0 {
                *level
            } else {
                PwmValue::MAX.step(-i32::from(level.get()))
            };
            device.write_pwm(channel, value);
        }

        if let Err(_e) = device.flush() {
            #[cfg(feature = "defmt")]
            defmt::warn!("tlc5947 flush failed: {}", _e);
            *needs_begin = true;
        }

        fade::spawn_after(config::FADE_PERIOD_MS.millis()).unwrap();
    }
}
