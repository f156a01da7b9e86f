use dioxus::prelude::*;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Text direction for the `dir` attribute on the document root.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Global language state, provided as context next to `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct I18nState {
    pub language: Signal<Language>,
}

impl I18nState {
    pub fn new() -> Self {
        Self {
            language: Signal::new(Language::En),
        }
    }
}

/// Hook to access the language state.
pub fn use_language() -> I18nState {
    use_context::<I18nState>()
}

/// Look up a UI string. Unknown keys fall back to the key itself so a
/// missing entry shows up in the page instead of panicking.
pub fn tr(lang: Language, key: &'static str) -> &'static str {
    use Language::*;
    match (key, lang) {
        ("app.title", En) => "Clinic Manager",
        ("app.title", Ar) => "إدارة العيادة",
        ("nav.dashboard", En) => "Dashboard",
        ("nav.dashboard", Ar) => "لوحة التحكم",
        ("nav.settings", En) => "Settings",
        ("nav.settings", Ar) => "الإعدادات",
        ("nav.sign_out", En) => "Sign Out",
        ("nav.sign_out", Ar) => "تسجيل الخروج",
        ("nav.my_appointments", En) => "My Appointments",
        ("nav.my_appointments", Ar) => "مواعيدي",
        ("login.title", En) => "Sign In",
        ("login.title", Ar) => "تسجيل الدخول",
        ("login.subtitle", En) => "Enter your credentials to access your clinic",
        ("login.subtitle", Ar) => "أدخل بياناتك للوصول إلى عيادتك",
        ("login.email", En) => "Email",
        ("login.email", Ar) => "البريد الإلكتروني",
        ("login.password", En) => "Password",
        ("login.password", Ar) => "كلمة المرور",
        ("login.submit", En) => "Sign In",
        ("login.submit", Ar) => "دخول",
        ("login.submitting", En) => "Signing in...",
        ("login.submitting", Ar) => "جارٍ تسجيل الدخول...",
        ("login.no_account", En) => "Don't have a clinic yet? ",
        ("login.no_account", Ar) => "ليس لديك عيادة بعد؟ ",
        ("login.join_us", En) => "Join us",
        ("login.join_us", Ar) => "انضم إلينا",
        ("join.title", En) => "Register Your Clinic",
        ("join.title", Ar) => "سجّل عيادتك",
        ("join.subtitle", En) => "Create a clinic and its manager account",
        ("join.subtitle", Ar) => "أنشئ عيادة وحساب مديرها",
        ("join.clinic_section", En) => "Clinic details",
        ("join.clinic_section", Ar) => "بيانات العيادة",
        ("join.manager_section", En) => "Manager account",
        ("join.manager_section", Ar) => "حساب المدير",
        ("join.clinic_name", En) => "Clinic name",
        ("join.clinic_name", Ar) => "اسم العيادة",
        ("join.address", En) => "Address",
        ("join.address", Ar) => "العنوان",
        ("join.phone", En) => "Phone",
        ("join.phone", Ar) => "الهاتف",
        ("join.plan", En) => "Subscription plan",
        ("join.plan", Ar) => "خطة الاشتراك",
        ("join.logo", En) => "Clinic logo (optional)",
        ("join.logo", Ar) => "شعار العيادة (اختياري)",
        ("join.manager_name", En) => "Full name",
        ("join.manager_name", Ar) => "الاسم الكامل",
        ("join.specialty", En) => "Specialty (if practicing)",
        ("join.specialty", Ar) => "التخصص (إن وجد)",
        ("join.confirm_password", En) => "Confirm password",
        ("join.confirm_password", Ar) => "تأكيد كلمة المرور",
        ("join.submit", En) => "Register Clinic",
        ("join.submit", Ar) => "تسجيل العيادة",
        ("join.submitting", En) => "Registering...",
        ("join.submitting", Ar) => "جارٍ التسجيل...",
        ("join.have_account", En) => "Already registered? ",
        ("join.have_account", Ar) => "مسجّل بالفعل؟ ",
        ("dashboard.welcome", En) => "Welcome back",
        ("dashboard.welcome", Ar) => "مرحباً بعودتك",
        ("dashboard.today_appointments", En) => "Today's Appointments",
        ("dashboard.today_appointments", Ar) => "مواعيد اليوم",
        ("dashboard.active_doctors", En) => "Active Doctors",
        ("dashboard.active_doctors", Ar) => "الأطباء النشطون",
        ("dashboard.total_patients", En) => "Total Patients",
        ("dashboard.total_patients", Ar) => "إجمالي المرضى",
        ("dashboard.monthly_revenue", En) => "Monthly Revenue",
        ("dashboard.monthly_revenue", Ar) => "الإيراد الشهري",
        ("dashboard.registered_flash", En) => "Clinic registered successfully. Welcome aboard!",
        ("dashboard.registered_flash", Ar) => "تم تسجيل العيادة بنجاح. أهلاً بكم!",
        ("dashboard.total_clinics", En) => "Total Clinics",
        ("dashboard.total_clinics", Ar) => "إجمالي العيادات",
        ("dashboard.active_subscriptions", En) => "Active Subscriptions",
        ("dashboard.active_subscriptions", Ar) => "الاشتراكات النشطة",
        ("dashboard.pending_approvals", En) => "Pending Approvals",
        ("dashboard.pending_approvals", Ar) => "طلبات قيد الموافقة",
        ("dashboard.todays_schedule", En) => "Today's Schedule",
        ("dashboard.todays_schedule", Ar) => "جدول اليوم",
        ("dashboard.no_schedule", En) => "No appointments today",
        ("dashboard.no_schedule", Ar) => "لا توجد مواعيد اليوم",
        ("dashboard.settings_desc", En) => "Update the clinic profile, plan, and logo",
        ("dashboard.settings_desc", Ar) => "تحديث ملف العيادة والخطة والشعار",
        ("dashboard.view_appointments", En) => "View all appointments",
        ("dashboard.view_appointments", Ar) => "عرض جميع المواعيد",
        ("dashboard.view_appointments_desc", En) => "Browse upcoming and past visits",
        ("dashboard.view_appointments_desc", Ar) => "تصفح الزيارات القادمة والسابقة",
        ("dashboard.no_upcoming", En) => "No upcoming appointments",
        ("dashboard.no_upcoming", Ar) => "لا توجد مواعيد قادمة",
        ("reception.register_patient", En) => "Register Patient",
        ("reception.register_patient", Ar) => "تسجيل مريض",
        ("reception.register_patient_desc", En) => "Add a walk-in patient to the clinic records",
        ("reception.register_patient_desc", Ar) => "إضافة مريض جديد إلى سجلات العيادة",
        ("reception.new_appointment", En) => "New Appointment",
        ("reception.new_appointment", Ar) => "موعد جديد",
        ("reception.new_appointment_desc", En) => "Book a visit for a registered patient",
        ("reception.new_appointment_desc", Ar) => "حجز زيارة لمريض مسجّل",
        ("reception.patient_name", En) => "Patient name",
        ("reception.patient_name", Ar) => "اسم المريض",
        ("reception.national_id", En) => "National ID",
        ("reception.national_id", Ar) => "الرقم القومي",
        ("reception.date_of_birth", En) => "Date of birth",
        ("reception.date_of_birth", Ar) => "تاريخ الميلاد",
        ("reception.notes", En) => "Notes",
        ("reception.notes", Ar) => "ملاحظات",
        ("reception.search_patient", En) => "Search patients",
        ("reception.search_patient", Ar) => "البحث عن مريض",
        ("reception.search_placeholder", En) => "Name, national ID, or phone",
        ("reception.search_placeholder", Ar) => "الاسم أو الرقم القومي أو الهاتف",
        ("reception.previous_visits", En) => "Previous visits",
        ("reception.previous_visits", Ar) => "الزيارات السابقة",
        ("reception.no_visits", En) => "No previous visits",
        ("reception.no_visits", Ar) => "لا توجد زيارات سابقة",
        ("reception.specialty", En) => "Specialty",
        ("reception.specialty", Ar) => "التخصص",
        ("reception.doctor", En) => "Doctor",
        ("reception.doctor", Ar) => "الطبيب",
        ("reception.date", En) => "Date",
        ("reception.date", Ar) => "التاريخ",
        ("reception.time", En) => "Time",
        ("reception.time", Ar) => "الوقت",
        ("reception.complaint", En) => "Complaint",
        ("reception.complaint", Ar) => "الشكوى",
        ("reception.book", En) => "Book Appointment",
        ("reception.book", Ar) => "حجز الموعد",
        ("reception.booking", En) => "Booking...",
        ("reception.booking", Ar) => "جارٍ الحجز...",
        ("settings.title", En) => "Clinic Settings",
        ("settings.title", Ar) => "إعدادات العيادة",
        ("settings.save", En) => "Save Changes",
        ("settings.save", Ar) => "حفظ التغييرات",
        ("settings.saving", En) => "Saving...",
        ("settings.saving", Ar) => "جارٍ الحفظ...",
        ("settings.cancel", En) => "Cancel",
        ("settings.cancel", Ar) => "إلغاء",
        ("settings.saved", En) => "Settings saved",
        ("settings.saved", Ar) => "تم حفظ الإعدادات",
        ("settings.retry", En) => "Retry",
        ("settings.retry", Ar) => "إعادة المحاولة",
        ("settings.status", En) => "Status",
        ("settings.status", Ar) => "الحالة",
        ("appointments.title", En) => "My Appointments",
        ("appointments.title", Ar) => "مواعيدي",
        ("appointments.all", En) => "All",
        ("appointments.all", Ar) => "الكل",
        ("appointments.upcoming", En) => "Upcoming",
        ("appointments.upcoming", Ar) => "القادمة",
        ("appointments.past", En) => "Past",
        ("appointments.past", Ar) => "السابقة",
        ("appointments.empty", En) => "No appointments to show",
        ("appointments.empty", Ar) => "لا توجد مواعيد",
        ("status.confirmed", En) => "Confirmed",
        ("status.confirmed", Ar) => "مؤكد",
        ("status.pending", En) => "Pending",
        ("status.pending", Ar) => "قيد الانتظار",
        ("status.cancelled", En) => "Cancelled",
        ("status.cancelled", Ar) => "ملغي",
        ("status.completed", En) => "Completed",
        ("status.completed", Ar) => "مكتمل",
        ("reception.doctors_failed", En) => "Could not load the doctor list",
        ("reception.doctors_failed", Ar) => "تعذر تحميل قائمة الأطباء",
        ("record.title", En) => "Medical record",
        ("record.title", Ar) => "السجل الطبي",
        ("record.intro", En) => "A summary of your previous visits and diagnoses.",
        ("record.intro", Ar) => "ملخص زياراتك وتشخيصاتك السابقة.",
        ("record.empty", En) => "No visits on file yet",
        ("record.empty", Ar) => "لا توجد زيارات مسجلة بعد",
        ("dashboard.medical_record", En) => "Medical record",
        ("dashboard.medical_record", Ar) => "السجل الطبي",
        ("dashboard.medical_record_desc", En) => "Review your previous visits",
        ("dashboard.medical_record_desc", Ar) => "راجع زياراتك السابقة",
        ("common.loading", En) => "Loading...",
        ("common.loading", Ar) => "جارٍ التحميل...",
        (other, _) => other,
    }
}
