// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::LazyLock;

use yansi::Style;

static ASCII_MODE: AtomicBool = AtomicBool::new(false);

/// Must be called before any prefix is used for the first time.
pub fn ascii_mode() {
    ASCII_MODE.store(true, SeqCst);
}

pub fn no_color_mode() {
    yansi::disable();
}

pub static ATTENTION: Style = Style::new().yellow().bold();
pub static ERROR: Style = Style::new().red().bold();
pub static EMPH: Style = Style::new().white().bold();
pub static OK: Style = Style::new().green().bold();

fn prefix(ascii: &'static str, unicode: &'static str) -> &'static str {
    if ASCII_MODE.load(SeqCst) {
        ascii
    } else {
        unicode
    }
}

pub static ATTENTION_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("!", "⚠︎"));
pub static CAPTION_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix(">", "▶︎"));
pub static ERROR_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("!", "⚡︎"));
pub static INFO_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("-", "▸"));
pub static ITEMAZATION_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("*", "∙"));
pub static FINISHED_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("+", "❖"));
pub static OK_PREFIX: LazyLock<&str> = LazyLock::new(|| prefix("=", "✓"));
