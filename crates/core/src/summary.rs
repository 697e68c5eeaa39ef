use crate::domain::forms::StaffingRole;

/// Render a staffing-role list as the multi-line text block stored in the
/// provider's role-summary column. One line per role, markdown-ish field
/// labels, `\n`-joined; an empty list renders as the empty string.
///
/// The exact shape is load-bearing: operations people read these blocks
/// in Notion and the frontends preview the same text.
pub fn format_role_summary(roles: &[StaffingRole]) -> String {
    roles
        .iter()
        .map(|role| {
            format!(
                "👉 *Turno:* {} | *Horario:* {} | *Puestos:* {} | *Días/Semana:* {} | \
                 *Horas/Día:* {} | *Sueldo:* ${} | *Costo:* ${}",
                role.shift_type,
                role.schedule,
                role.positions,
                role.days_per_week,
                role.hours_per_day,
                role.net_salary,
                role.estimated_cost,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
