//! Timer group main watchdog (MWDT).
//!
//! These are the HAL entry points a watchdog driver builds on. They're the
//! same register sequences that the timer group retention tables replay
//! after sleep: unlock with the write key, change the configuration, then
//! latch it with `CONF_UPDATE_EN`.
//!
//! Most methods require that write protection is off. Use
//! [`write_protect_disable`](Wdt::write_protect_disable) first, and
//! [`write_protect_enable`](Wdt::write_protect_enable) when you're done.
//!
//! ```no_run
//! use esp_regdma::wdt::{Stage, StageAction, Wdt};
//! # const TIMG0: *const () = 0x6000_8000 as _;
//!
//! // Safety: TIMG0 is the timer group 0 block, and nothing else touches its watchdog.
//! let mut wdt = unsafe { Wdt::new(TIMG0) };
//! wdt.init(40_000, false);
//! wdt.write_protect_disable();
//! wdt.config_stage(Stage::Stage0, 2_000, StageAction::ResetSystem);
//! wdt.enable();
//! wdt.write_protect_enable();
//! ```

use crate::ral::{self, timg, Static};

/// A watchdog stage.
///
/// Stages run in order once the watchdog is enabled. Each one waits for its
/// timeout, then takes its [`StageAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Stage {
    Stage0 = 0,
    Stage1 = 1,
    Stage2 = 2,
    Stage3 = 3,
}

/// What happens when a stage times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum StageAction {
    /// Stage is disabled.
    Off = 0,
    /// Raise the watchdog interrupt.
    Int = 1,
    /// Reset the CPU core.
    ResetCpu = 2,
    /// Reset the main system, including the timer groups.
    ResetSystem = 3,
}

impl StageAction {
    const fn from_raw(raw: u32) -> Self {
        match raw & 0x3 {
            0 => StageAction::Off,
            1 => StageAction::Int,
            2 => StageAction::ResetCpu,
            _ => StageAction::ResetSystem,
        }
    }
}

impl Stage {
    /// Offset of this stage's action field in `WDTCONFIG0`.
    ///
    /// Stage fields step down from `STG0` by two bits.
    const fn action_offset(self) -> u32 {
        timg::WDTCONFIG0::STG0::offset - 2 * self as u32
    }
}

/// A timer group watchdog.
pub struct Wdt {
    timg: Static<timg::RegisterBlock>,
}

impl Wdt {
    /// Create a watchdog handle over a timer group block.
    ///
    /// # Safety
    ///
    /// `timg` must point to the start of a timer group register block. The
    /// handle doesn't coordinate with anything else that uses the block's
    /// watchdog; you're responsible for making sure that there's only one.
    pub const unsafe fn new(timg: *const ()) -> Self {
        Wdt {
            timg: Static(timg.cast()),
        }
    }

    /// Put the watchdog in a known state.
    ///
    /// The watchdog ends up disabled, with all stages off, 3.2us reset
    /// pulses, and the flash boot protection cleared. `prescaler` divides
    /// the watchdog clock; `enable_intr` routes stage interrupts to the
    /// interrupt matrix.
    pub fn init(&mut self, prescaler: u16, enable_intr: bool) {
        debug!("wdt: init, prescaler {}", prescaler);
        self.write_protect_disable();
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG0,
            EN: 0,
            STG0: 0,
            STG1: 0,
            STG2: 0,
            STG3: 0,
            FLASHBOOT_MOD_EN: 0,
            SYS_RESET_LENGTH: LEN_3_2US,
            CPU_RESET_LENGTH: LEN_3_2US
        );
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG1,
            CLK_PRESCALE: prescaler as u32,
            DIVCNT_RST: 1
        );
        ral::modify_reg!(crate::ral::timg, self.timg, INT_ENA_TIMERS, WDT: enable_intr as u32);
        ral::write_reg!(crate::ral::timg, self.timg, INT_CLR_TIMERS, WDT: 1);
        self.config_update();
        self.write_protect_enable();
    }

    /// Undo [`init`](Self::init): disable the watchdog, its stages, and its
    /// interrupt.
    pub fn deinit(&mut self) {
        debug!("wdt: deinit");
        self.write_protect_disable();
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG0,
            EN: 0,
            STG0: 0,
            STG1: 0,
            STG2: 0,
            STG3: 0,
            FLASHBOOT_MOD_EN: 0
        );
        ral::modify_reg!(crate::ral::timg, self.timg, INT_ENA_TIMERS, WDT: 0);
        ral::write_reg!(crate::ral::timg, self.timg, INT_CLR_TIMERS, WDT: 1);
        self.config_update();
        self.write_protect_enable();
    }

    /// Configure one stage. `timeout` counts prescaled watchdog ticks.
    ///
    /// `StageAction::Off` also clears the stage's timeout.
    pub fn config_stage(&mut self, stage: Stage, timeout: u32, action: StageAction) {
        trace!("wdt: stage {} timeout {} action {}", stage as u32, timeout, action as u32);
        let timeout = match action {
            StageAction::Off => 0,
            _ => timeout,
        };
        let offset = stage.action_offset();
        let config = self.timg.WDTCONFIG0.read() & !(0x3 << offset);
        self.timg
            .WDTCONFIG0
            .write(config | ((action as u32) << offset));
        self.timeout(stage).write(timeout);
        self.config_update();
    }

    /// The action configured for `stage`.
    pub fn stage_action(&self, stage: Stage) -> StageAction {
        StageAction::from_raw(self.timg.WDTCONFIG0.read() >> stage.action_offset())
    }

    /// The timeout configured for `stage`.
    pub fn stage_timeout(&self, stage: Stage) -> u32 {
        self.timeout(stage).read()
    }

    fn timeout(&self, stage: Stage) -> &ral_registers::RWRegister<u32> {
        match stage {
            Stage::Stage0 => &self.timg.WDTCONFIG2,
            Stage::Stage1 => &self.timg.WDTCONFIG3,
            Stage::Stage2 => &self.timg.WDTCONFIG4,
            Stage::Stage3 => &self.timg.WDTCONFIG5,
        }
    }

    /// Lock the watchdog registers.
    pub fn write_protect_enable(&mut self) {
        ral::write_reg!(crate::ral::timg, self.timg, WDTWPROTECT, WKEY: LOCK);
    }

    /// Unlock the watchdog registers.
    pub fn write_protect_disable(&mut self) {
        ral::write_reg!(crate::ral::timg, self.timg, WDTWPROTECT, WKEY: UNLOCK);
    }

    /// Returns `true` if the watchdog registers are locked.
    pub fn is_write_protected(&self) -> bool {
        ral::read_reg!(crate::ral::timg, self.timg, WDTWPROTECT, WKEY) != timg::WDTWPROTECT::WKEY::RW::UNLOCK
    }

    /// Restart the current stage's count.
    pub fn feed(&mut self) {
        // Any value feeds.
        ral::write_reg!(crate::ral::timg, self.timg, WDTFEED, 1);
    }

    /// Start the watchdog from stage 0.
    pub fn enable(&mut self) {
        self.feed();
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG0, EN: 1);
        self.config_update();
    }

    pub fn disable(&mut self) {
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG0, EN: 0);
        self.config_update();
    }

    pub fn is_enabled(&self) -> bool {
        ral::read_reg!(crate::ral::timg, self.timg, WDTCONFIG0, EN == 1)
    }

    /// Move the configuration into the watchdog clock domain. Hardware
    /// clears the bit when it's done.
    fn config_update(&mut self) {
        ral::modify_reg!(crate::ral::timg, self.timg, WDTCONFIG0, CONF_UPDATE_EN: 1);
    }
}

#[cfg(test)]
mod tests {
    use core::mem::MaybeUninit;

    use super::*;

    fn block() -> MaybeUninit<timg::RegisterBlock> {
        MaybeUninit::zeroed()
    }

    fn wdt(block: &MaybeUninit<timg::RegisterBlock>) -> Wdt {
        // Safety: zeroed memory is a valid register block, and it outlives
        // the handle in every test.
        unsafe { Wdt::new(block.as_ptr().cast()) }
    }

    fn regs(block: &MaybeUninit<timg::RegisterBlock>) -> &timg::RegisterBlock {
        // Safety: zeroed memory is a valid register block.
        unsafe { block.assume_init_ref() }
    }

    #[test]
    fn init_leaves_watchdog_off() {
        let block = block();
        let mut wdt = wdt(&block);
        wdt.init(40_000, true);

        let regs = regs(&block);
        assert!(!wdt.is_enabled());
        assert!(wdt.is_write_protected());
        let config0 = regs.WDTCONFIG0.read();
        assert_eq!(config0 >> 23 & 0xff, 0, "stages off");
        assert_eq!(config0 >> 15 & 0x3f, 0x3f, "3.2us reset pulses");
        assert_ne!(config0 & timg::WDTCONFIG0::CONF_UPDATE_EN::mask, 0);
        assert_eq!(regs.WDTCONFIG1.read() >> 16, 40_000);
        assert_eq!(regs.INT_ENA_TIMERS.read(), timg::INT_ENA_TIMERS::WDT::mask);
        assert_eq!(regs.WDTWPROTECT.read(), timg::WDTWPROTECT::WKEY::RW::LOCK);
    }

    #[test]
    fn stages_have_their_own_fields() {
        let block = block();
        let mut wdt = wdt(&block);
        wdt.write_protect_disable();
        assert!(!wdt.is_write_protected());

        wdt.config_stage(Stage::Stage0, 100, StageAction::Int);
        wdt.config_stage(Stage::Stage2, 300, StageAction::ResetSystem);
        assert_eq!(wdt.stage_action(Stage::Stage0), StageAction::Int);
        assert_eq!(wdt.stage_action(Stage::Stage1), StageAction::Off);
        assert_eq!(wdt.stage_action(Stage::Stage2), StageAction::ResetSystem);
        assert_eq!(wdt.stage_timeout(Stage::Stage0), 100);
        assert_eq!(wdt.stage_timeout(Stage::Stage2), 300);

        let config0 = regs(&block).WDTCONFIG0.read();
        assert_eq!(config0 >> 29 & 0x3, 1);
        assert_eq!(config0 >> 25 & 0x3, 3);

        wdt.config_stage(Stage::Stage2, 300, StageAction::Off);
        assert_eq!(wdt.stage_action(Stage::Stage2), StageAction::Off);
        assert_eq!(wdt.stage_timeout(Stage::Stage2), 0);
        assert_eq!(wdt.stage_action(Stage::Stage0), StageAction::Int);
    }

    #[test]
    fn enable_disable() {
        let block = block();
        let mut wdt = wdt(&block);
        wdt.write_protect_disable();
        wdt.enable();
        assert!(wdt.is_enabled());
        wdt.disable();
        assert!(!wdt.is_enabled());
    }

    #[test]
    fn deinit_clears_stages() {
        let block = block();
        let mut wdt = wdt(&block);
        wdt.init(1, true);
        wdt.write_protect_disable();
        wdt.config_stage(Stage::Stage3, 5, StageAction::ResetCpu);
        wdt.enable();

        wdt.deinit();
        assert!(!wdt.is_enabled());
        assert_eq!(wdt.stage_action(Stage::Stage3), StageAction::Off);
        assert_eq!(regs(&block).INT_ENA_TIMERS.read(), 0);
        assert!(wdt.is_write_protected());
    }
}
