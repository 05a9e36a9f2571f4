//! # Transaction Entry Screen
//!
//! Renders the [`EntryWorkflow`](crate::app::EntryWorkflow) phase by phase.
//! Every edit goes through [`App::edit_entry`] so a displayed receipt is
//! cleared as soon as the form changes.

use shared::{format_rupiah, CategoryType, PaymentMethod};

use crate::app::entry::QUICK_AMOUNTS;
use crate::app::{App, AppState, DonorSource, EntryPhase, EntryWorkflow};
use crate::core::error::Result;
use crate::receipt::{self, ReceiptLayout, ReceiptSource};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_WIDTH: f32 = 360.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let entry = &state.entry;

    forms::render_form_heading(ui, "Transaksi Donasi", &theme);
    if let Some(step) = entry.phase().step() {
        let title = match entry.phase() {
            EntryPhase::ProfileEntry => "Profil Donatur",
            EntryPhase::EventSelection => "Event",
            _ => "Pembayaran",
        };
        forms::render_hint(ui, &format!("Langkah {} dari 3 · {}", step, title), &theme);
        ui.add_space(8.0);
    }

    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        match entry.phase() {
            EntryPhase::Idle => render_idle(ui, app, &theme),
            EntryPhase::ProfileEntry => render_profile(ui, state, app, &theme),
            EntryPhase::EventSelection => render_event(ui, state, app, &theme),
            EntryPhase::PaymentEntry => render_payment(ui, state, app, &theme),
            EntryPhase::Done => render_done(ui, state, app, &theme),
        }

        if let Some(error) = &entry.error {
            ui.add_space(8.0);
            forms::render_error(ui, error, &theme);
        }
    });
}

/// Run a guarded transition; rejected ones are logged, validation errors
/// are already on the workflow.
fn transition(app: &mut App, step: impl FnOnce(&mut EntryWorkflow) -> Result<()>) {
    app.edit_entry(|entry| {
        if let Err(e) = step(entry) {
            tracing::debug!(error = %e, "Entry transition rejected");
        }
    });
}

fn render_idle(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    forms::render_hint(ui, "Pilih jenis donatur untuk memulai transaksi.", theme);
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if forms::primary_button(ui, "Donatur Lama", true, theme).clicked() {
            app.handle_start_entry(DonorSource::Existing);
        }
        if forms::primary_button(ui, "Donatur Baru", true, theme).clicked() {
            app.handle_start_entry(DonorSource::New);
        }
    });
}

fn render_profile(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let entry = &state.entry;

    if entry.source() == Some(DonorSource::Existing) {
        render_donor_search(ui, state, app, theme);
        ui.separator();
    }

    let form = &entry.form;
    forms::bound_text_input(ui, "Nama *", &form.name, "Nama donatur", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.form.name = v)
    });
    forms::bound_text_input(ui, "No. HP *", &form.phone_number, "08xxxxxxxxxx", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.form.phone_number = v)
    });
    forms::bound_text_input(ui, "Email", &form.email, "opsional", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.form.email = v)
    });
    forms::bound_text_input(ui, "Alamat", &form.address, "opsional", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.form.address = v)
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if forms::secondary_button(ui, "Kembali").clicked() {
            app.edit_entry(EntryWorkflow::back);
        }
        if forms::primary_button(ui, "Lanjut", true, theme).clicked() {
            transition(app, EntryWorkflow::confirm_profile);
        }
    });
}

fn render_donor_search(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let search = &state.entry.search;

    ui.label("Cari donatur (nama atau No. HP)");
    let mut submit = false;
    ui.horizontal(|ui| {
        let mut query = search.query.clone();
        let response = ui.add_sized([FIELD_WIDTH - 80.0, 30.0], egui::TextEdit::singleline(&mut query));
        if response.changed() {
            app.edit_entry(|e| e.search.query = query);
        }
        submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(!search.loading, egui::Button::new("Cari")).clicked() {
            submit = true;
        }
    });
    if submit {
        app.handle_donor_search();
    }

    if search.loading {
        forms::render_loading(ui, "Mencari...", theme);
    } else if let Some(error) = &search.error {
        forms::render_error(ui, error, theme);
    } else if search.searched && search.results.is_empty() {
        forms::render_hint(ui, "Donatur tidak ditemukan. Isi data secara manual.", theme);
    }

    for (index, donor) in search.results.iter().enumerate() {
        ui.push_id(index, |ui| {
            ui.horizontal(|ui| {
                let name = donor.name.as_deref().unwrap_or("-");
                let phone = donor.phone.as_deref().unwrap_or("-");
                ui.label(format!("{} · {}", name, phone));
                if ui.small_button("Pilih").clicked() {
                    let donor = donor.clone();
                    transition(app, |e| e.select_donor(&donor));
                }
            });
        });
    }
    ui.add_space(8.0);
}

fn render_event(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let form = &state.entry.form;
    let events = &state.store.pos.events;

    ui.label("Event *");
    if events.loading {
        forms::render_loading(ui, "Memuat event...", theme);
    } else if let Some(error) = &events.error {
        forms::render_error(ui, error, theme);
    }

    let selected_label = form
        .event_id
        .as_deref()
        .and_then(|id| events.data.iter().find(|e| e.id == id))
        .map(|e| e.label())
        .unwrap_or_else(|| "Pilih event".to_string());
    let mut event_id = form.event_id.clone();
    egui::ComboBox::from_id_salt("entry_event")
        .width(FIELD_WIDTH)
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            for event in &events.data {
                ui.selectable_value(&mut event_id, Some(event.id.clone()), event.label());
            }
        });
    if event_id != form.event_id {
        app.edit_entry(|e| e.form.event_id = event_id);
    }

    ui.add_space(8.0);
    ui.label("Tanggal");
    let mut date = form.date;
    if ui
        .add(egui_extras::DatePickerButton::new(&mut date).id_salt("entry_date"))
        .changed()
    {
        app.edit_entry(|e| e.form.date = date);
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if forms::secondary_button(ui, "Kembali").clicked() {
            app.edit_entry(EntryWorkflow::back);
        }
        if forms::primary_button(ui, "Lanjut", true, theme).clicked() {
            transition(app, EntryWorkflow::confirm_event);
        }
    });
}

fn render_payment(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let form = &state.entry.form;
    let categories = &state.store.pos.categories;
    let submitting = state.store.pos.submitting;

    ui.label("Jenis donasi");
    ui.horizontal(|ui| {
        for category_type in CategoryType::all() {
            if ui
                .selectable_label(form.category_type == *category_type, category_type.label())
                .clicked()
            {
                app.handle_category_type_change(*category_type);
            }
        }
    });

    let selected_label = form
        .category_id
        .as_deref()
        .and_then(|id| categories.data.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Pilih kategori".to_string());
    let mut category_id = form.category_id.clone();
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("entry_category")
            .width(FIELD_WIDTH)
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut category_id, None, "Tanpa kategori");
                for category in &categories.data {
                    ui.selectable_value(&mut category_id, Some(category.id.clone()), &category.name);
                }
            });
        if categories.loading {
            ui.spinner();
        }
    });
    if let Some(error) = &categories.error {
        forms::render_error(ui, error, theme);
    }
    if category_id != form.category_id {
        app.edit_entry(|e| e.form.category_id = category_id);
    }

    ui.add_space(8.0);
    forms::bound_text_input(ui, "Nominal *", &form.amount, "0", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.set_amount(&v))
    });
    forms::render_hint(ui, &forms::rupiah_label(form.amount_value() as i64), theme);
    ui.horizontal_wrapped(|ui| {
        for amount in QUICK_AMOUNTS {
            if ui.button(format_rupiah(amount as i64)).clicked() {
                app.edit_entry(|e| e.apply_quick_amount(amount));
            }
        }
    });

    ui.add_space(8.0);
    ui.label("Metode pembayaran");
    ui.horizontal(|ui| {
        for method in PaymentMethod::all() {
            if ui
                .selectable_label(form.payment_method == *method, method.label())
                .clicked()
                && form.payment_method != *method
            {
                let method = *method;
                app.edit_entry(|e| e.form.payment_method = method);
            }
        }
    });

    ui.add_space(8.0);
    ui.label("Bukti pembayaran");
    ui.horizontal(|ui| {
        match &form.image {
            Some(image) => {
                ui.label(&image.file_name);
                if ui.small_button("Hapus").clicked() {
                    app.edit_entry(|e| e.form.image = None);
                }
            }
            None => {
                forms::render_hint(ui, "Belum ada file", theme);
            }
        }
        if ui.button("Pilih file...").clicked() {
            app.handle_pick_image();
        }
    });

    ui.add_space(8.0);
    forms::bound_text_input(ui, "Keterangan", &form.description, "opsional", FIELD_WIDTH, |v| {
        app.edit_entry(|e| e.form.description = v)
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!submitting, egui::Button::new("Kembali")).clicked() {
            app.edit_entry(EntryWorkflow::back);
        }
        let label = if submitting { "Menyimpan..." } else { "Simpan Transaksi" };
        if forms::primary_button(ui, label, !submitting, theme).clicked() {
            app.handle_submit();
        }
        if submitting {
            ui.spinner();
        }
    });
}

fn render_done(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let form = &state.entry.form;

    egui::Frame::group(ui.style())
        .fill(theme.colors.emerald_light)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Struk donasi tercatat")
                    .size(18.0)
                    .strong()
                    .color(theme.colors.emerald_dark),
            );
            ui.add_space(8.0);

            if let Some(tx) = &state.store.pos.transaction_success {
                let data = receipt::normalize(
                    &ReceiptSource::Submitted(tx.clone()),
                    state.store.auth.user.as_ref(),
                );
                egui::Grid::new("entry_receipt")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in [
                            ("No. Bukti", data.receipt_number.clone()),
                            ("Donatur", data.donor_name.clone()),
                            ("No. HP", data.phone.clone()),
                            ("Metode", form.payment_method.label().to_string()),
                            ("Total", forms::rupiah_label(data.nominal)),
                            ("Terbilang", data.words_for(data.nominal)),
                        ] {
                            ui.colored_label(theme.dim, label);
                            ui.label(value);
                            ui.end_row();
                        }
                    });

                if !data.lines.is_empty() {
                    ui.add_space(6.0);
                    for line in &data.lines {
                        ui.label(format!("• {}: {}", line.label(), forms::rupiah_label(line.nominal)));
                    }
                }
            }

            if form.payment_method.requires_validation() {
                ui.add_space(6.0);
                ui.colored_label(
                    theme.warning,
                    "Pembayaran transfer/QRIS menunggu validasi di menu Pending.",
                );
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        for layout in [ReceiptLayout::Thermal, ReceiptLayout::Formal] {
            if forms::secondary_button(ui, layout.label()).clicked() {
                app.handle_print_submitted(layout);
            }
        }
        if forms::primary_button(ui, "Transaksi baru", true, theme).clicked() {
            app.handle_new_entry();
        }
        if forms::secondary_button(ui, "Selesai").clicked() {
            app.handle_reset_entry();
        }
    });
}
