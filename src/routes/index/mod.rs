mod handler;
mod model;

pub use handler::{index, lock_screen, main_page, menu_style, switch_skin, unlock_screen};
pub use model::{
    IndexViewModel, LockScreenResponse, MainPageResponse, MenuStyleResponse, SwitchSkinResponse,
    UnlockScreenRequest, UserInfo,
};
