use dining_business::{NoticeLevel, Notices};
use dining_states::StateCtx;
use egui::{Color32, Ui};

pub fn notice_banner(ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(notice) = ctx.state::<Notices>().current.clone() else {
        return;
    };

    let color = match notice.level {
        NoticeLevel::Info => Color32::from_rgb(25, 135, 84),
        NoticeLevel::Error => Color32::from_rgb(220, 53, 69),
    };

    let mut dismiss = false;
    ui.horizontal(|ui| {
        ui.colored_label(color, notice.message.as_str());
        if ui.small_button("Dismiss").clicked() {
            dismiss = true;
        }
    });
    ui.separator();

    if dismiss {
        ctx.update::<Notices>(Notices::dismiss);
    }
}
