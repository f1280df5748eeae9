pub const CHANNEL_COUNT: usize = 24;
pub const PWM_BITS: u32 = 12;
pub const MAX_PWM_VAL: u16 = (1 << PWM_BITS) - 1;

//-----------------------------------------------------------------------------

pub const MCU_XTAL_HZ: u32 = 8_000_000;
pub const SYSCLK_HZ: u32 = 72_000_000;

//-----------------------------------------------------------------------------

pub const SYSTICK_RATE_HZ: u32 = 1_000;

//-----------------------------------------------------------------------------

pub const FADE_PERIOD_MS: u64 = 5;
pub const FADE_STEP: i32 = 16;
