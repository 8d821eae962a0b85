/// Phase des Scans. Wird allein vom `ScanController` gehalten.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ScanPhase {
    #[default] // Startzustand
    Scanning,
    /// Letzte gültige Zelle klassifiziert, Cursor eingefroren.
    Done,
}
